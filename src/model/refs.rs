use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub position: String,
}

impl TeacherRef {
    /// "Surname N. P." as shown on schedule cards.
    pub fn short_name(&self) -> String {
        let initial = |s: &str| s.chars().next().map(|c| format!(" {}.", c)).unwrap_or_default();
        format!("{}{}{}", self.surname, initial(&self.name), initial(&self.patronymic))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}

/// A class period ("pair") of the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Week parity a lesson occurs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvenOdd {
    Odd,
    Even,
    #[default]
    Weekly,
}

impl DayOfWeek {
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl EvenOdd {
    pub fn as_str(self) -> &'static str {
        match self {
            EvenOdd::Odd => "ODD",
            EvenOdd::Even => "EVEN",
            EvenOdd::Weekly => "WEEKLY",
        }
    }

    pub fn on_odd_weeks(self) -> bool {
        matches!(self, EvenOdd::Odd | EvenOdd::Weekly)
    }

    pub fn on_even_weeks(self) -> bool {
        matches!(self, EvenOdd::Even | EvenOdd::Weekly)
    }
}
