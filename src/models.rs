//! Frontend Models
//!
//! Data structures matching the collection service contract.

use serde::{Deserialize, Serialize};

/// To-do item as persisted by the collection service.
///
/// Items only enter the local store from server responses, so the
/// server-assigned id is always present here. The pre-persistence shape
/// (no id yet) is [`NewTodo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    pub day: Weekday,
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
    pub day: Weekday,
}

/// Day of the week a task is filed under.
///
/// Serialized with the French display names the collection service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
    Dimanche,
}

impl Weekday {
    /// All seven days, in display order. Grouping and the day select both
    /// iterate this table.
    pub const ALL: [Weekday; 7] = [
        Weekday::Lundi,
        Weekday::Mardi,
        Weekday::Mercredi,
        Weekday::Jeudi,
        Weekday::Vendredi,
        Weekday::Samedi,
        Weekday::Dimanche,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Lundi => "Lundi",
            Weekday::Mardi => "Mardi",
            Weekday::Mercredi => "Mercredi",
            Weekday::Jeudi => "Jeudi",
            Weekday::Vendredi => "Vendredi",
            Weekday::Samedi => "Samedi",
            Weekday::Dimanche => "Dimanche",
        }
    }

    /// Heading and day-circle color for this day.
    pub fn color(self) -> &'static str {
        match self {
            Weekday::Lundi => "#FF5733",
            Weekday::Mardi => "#33FF57",
            Weekday::Mercredi => "#3357FF",
            Weekday::Jeudi => "#FF33A1",
            Weekday::Vendredi => "#FF8C33",
            Weekday::Samedi => "#8C33FF",
            Weekday::Dimanche => "#33FFF5",
        }
    }

    pub fn from_name(name: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_name_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_name(day.name()), Some(day));
        }
        assert_eq!(Weekday::from_name("Funday"), None);
    }

    #[test]
    fn test_weekday_serializes_as_french_name() {
        let json = serde_json::to_string(&Weekday::Lundi).expect("serialize");
        assert_eq!(json, "\"Lundi\"");
        let back: Weekday = serde_json::from_str("\"Dimanche\"").expect("deserialize");
        assert_eq!(back, Weekday::Dimanche);
    }

    #[test]
    fn test_todo_item_matches_wire_shape() {
        let json = r#"{"id":3,"text":"Buy milk","completed":false,"day":"Lundi"}"#;
        let item: TodoItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(item.id, 3);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.day, Weekday::Lundi);
    }

    #[test]
    fn test_new_todo_has_no_id_field() {
        let body = NewTodo {
            text: "Courses".to_string(),
            completed: false,
            day: Weekday::Samedi,
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["day"], "Samedi");
        assert_eq!(json["completed"], false);
    }
}
