//! DTOs for the todo API wire format.
//!
//! Declared independently of the server crate so the client stands alone;
//! the workspace integration test catches drift between the two. Wire
//! field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a todo. The server requires all three fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub name: String,
    pub description: String,
    pub status: bool,
}

/// Partial update; omitted fields keep their server-side values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// Envelope of `GET /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

/// Envelope returned by create, update and delete: a message, the affected
/// item, and the refreshed collection.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoMutation {
    pub message: String,
    pub todo: Todo,
    pub todos: Vec<Todo>,
}
