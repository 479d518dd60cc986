//! Data access model for todos.
//!
//! # Design
//!
//! [`TodoModel`] binds the todo schema to one collection and exposes typed
//! CRUD methods. Raw field maps go in, so required-field enforcement stays
//! store-level, and [`TodoItem`]s come out. Identifier strings are parsed
//! here; a malformed id surfaces as a validation error before the store is
//! consulted.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::schema::{FieldSpec, Schema};
use crate::store::{Collection, Document};
use crate::types::TodoItem;

/// Persistence rules for the todo collection: three required user fields
/// plus store-managed timestamps.
pub fn todo_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::text("name").required().non_empty(),
        FieldSpec::text("description").required(),
        FieldSpec::flag("status").required(),
    ])
    .with_timestamps()
}

/// Typed CRUD facade over the todo collection.
///
/// Clones share the same underlying collection, which is how the handlers
/// receive it as router state.
#[derive(Clone)]
pub struct TodoModel {
    collection: Arc<Collection>,
}

impl TodoModel {
    /// Model over a fresh in-memory collection.
    pub fn in_memory() -> Self {
        Self {
            collection: Arc::new(Collection::in_memory(todo_schema())),
        }
    }

    /// Model over a file-backed collection, loading existing documents.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let collection = Collection::open(path, todo_schema()).await?;
        Ok(Self {
            collection: Arc::new(collection),
        })
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Result<Vec<TodoItem>> {
        self.collection
            .find_all()
            .await
            .into_iter()
            .map(into_item)
            .collect()
    }

    /// Create a todo from raw body fields. The schema enforces required
    /// fields and kinds; the store assigns `id` and timestamps.
    pub async fn create(&self, fields: Document) -> Result<TodoItem> {
        into_item(self.collection.insert(fields).await?)
    }

    /// Apply a partial update and return the item after the change. Only
    /// supplied schema fields are touched; `id` and `createdAt` never are.
    pub async fn update_by_id(&self, id: &str, changes: Document) -> Result<TodoItem> {
        let id = parse_id(id)?;
        into_item(self.collection.update(&id, changes).await?)
    }

    /// Remove a todo and return it.
    pub async fn delete_by_id(&self, id: &str) -> Result<TodoItem> {
        let id = parse_id(id)?;
        into_item(self.collection.remove(&id).await?)
    }

    /// Flush the collection to its backing file. Part of shutdown.
    pub async fn close(&self) -> Result<()> {
        self.collection.flush().await
    }
}

/// Reject ids that cannot be store identifiers before touching the store.
/// Parsing also normalizes the textual form used for the lookup.
fn parse_id(id: &str) -> Result<String> {
    let parsed =
        Uuid::parse_str(id).map_err(|_| Error::Validation(format!("malformed todo id: {id}")))?;
    Ok(parsed.to_string())
}

fn into_item(doc: Document) -> Result<TodoItem> {
    serde_json::from_value(Value::Object(doc))
        .map_err(|err| Error::Store(format!("corrupt stored document: {err}")))
}
