use serde::{Deserialize, Serialize};

use super::{DayOfWeek, EntityId, GroupRef, Identified, Period};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub description: String,
    pub year: i32,
    /// `dd/MM/yyyy`, as the service formats it.
    pub start_day: String,
    pub end_day: String,
    #[serde(default)]
    pub current_semester: bool,
    #[serde(default)]
    pub default_semester: bool,
    #[serde(default)]
    pub disable: bool,
    #[serde(default)]
    pub semester_days: Vec<DayOfWeek>,
    #[serde(default)]
    pub semester_classes: Vec<Period>,
    #[serde(default)]
    pub semester_groups: Vec<GroupRef>,
}

impl Identified for Semester {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Source and target of a semester-to-semester copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRange {
    pub from_semester_id: EntityId,
    pub to_semester_id: EntityId,
}
