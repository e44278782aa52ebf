//! Task record types shared across the store and HTTP layers.

use serde::{Deserialize, Serialize};

/// A persisted task record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned primary key, immutable after creation.
    pub id: i64,
    /// Task title. Indexed, not unique.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Completion flag. Never null once persisted.
    pub completed: bool,
}

/// The client-supplied shape of a task: everything except the id.
///
/// Serves both create and update payloads. Update is full-replace per
/// field — every field here is written to the row unconditionally, so an
/// omitted `completed` lands as `false` and an omitted `description` as
/// NULL. An `id` field in the payload is ignored by serde.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag, defaults to false when unspecified.
    #[serde(default)]
    pub completed: bool,
}

/// Listing filter. An absent `completed` matches every row.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct TaskFilter {
    /// When set, only rows whose `completed` equals this value match.
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_completed_defaults_to_false() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, None);
        assert!(!draft.completed);
    }

    #[test]
    fn draft_ignores_id_field() {
        let draft: TaskDraft =
            serde_json::from_str(r#"{"id":99,"title":"t","completed":true}"#).unwrap();
        assert_eq!(draft.title, "t");
        assert!(draft.completed);
    }

    #[test]
    fn draft_missing_title_rejected() {
        let result = serde_json::from_str::<TaskDraft>(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn task_serializes_all_fields() {
        let task = Task {
            id: 1,
            title: "Buy milk".into(),
            description: Some("2%".into()),
            completed: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "2%");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn task_null_description_serializes_as_null() {
        let task = Task {
            id: 2,
            title: "t".into(),
            description: None,
            completed: true,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["description"].is_null());
    }

    #[test]
    fn filter_parses_from_query_shape() {
        let filter: TaskFilter = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert_eq!(filter.completed, Some(true));
        let filter: TaskFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.completed, None);
    }
}
