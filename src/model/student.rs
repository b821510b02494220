use serde::{Deserialize, Serialize};

use super::{EntityId, GroupRef, Identified};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub group: Option<GroupRef>,
}

impl Identified for Student {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
