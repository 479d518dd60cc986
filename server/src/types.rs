//! Typed view of stored todo documents.
//!
//! The store itself holds schema-checked JSON documents; [`TodoItem`] is
//! the typed shape the model hands to the rest of the crate. Field names
//! serialize camelCase to match the wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned identifier, stable for the lifetime of the item.
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: bool,
    /// Set once when the item is created.
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every accepted update.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TodoItem {
        TodoItem {
            id: Uuid::nil(),
            name: "Test".to_string(),
            description: "".to_string(),
            status: false,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn serializes_timestamps_in_camel_case() {
        let json = serde_json::to_value(item()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn round_trips_through_json() {
        let original = item();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
