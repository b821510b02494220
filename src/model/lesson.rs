use serde::{Deserialize, Serialize};

use super::{EntityId, GroupRef, Identified, SubjectRef, TeacherRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub hours: u32,
    #[serde(default)]
    pub teacher_for_site: String,
    #[serde(default)]
    pub subject_for_site: String,
    /// LECTURE, PRACTICAL, LABORATORY, ...
    pub lesson_type: String,
    pub teacher: TeacherRef,
    pub subject: SubjectRef,
    pub group: GroupRef,
    #[serde(default)]
    pub grouped: bool,
    #[serde(default)]
    pub link_to_meeting: Option<String>,
}

impl Identified for Lesson {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub description: String,
}

impl Identified for RoomType {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
