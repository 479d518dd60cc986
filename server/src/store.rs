//! Flat document collection with optional file persistence.
//!
//! # Design
//!
//! A [`Collection`] owns one insertion-ordered list of JSON documents
//! guarded by an async `RwLock`, bound to the [`Schema`] that validates
//! writes and drives timestamp maintenance. Persistence is a JSON Lines
//! file rewritten through a temp-file-then-rename step on every mutation;
//! when the rewrite fails the in-memory change is rolled back so the
//! collection and the file never disagree. The file preserves insertion
//! order across restarts.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::schema::{Schema, CREATED_AT, UPDATED_AT};

/// Name of the store-assigned identifier field.
pub const ID: &str = "id";

/// A stored record: one JSON object.
pub type Document = Map<String, Value>;

/// One collection of documents, optionally backed by a JSON Lines file.
pub struct Collection {
    schema: Schema,
    path: Option<PathBuf>,
    documents: RwLock<Vec<Document>>,
}

impl Collection {
    /// Empty collection with no backing file.
    pub fn in_memory(schema: Schema) -> Self {
        Self {
            schema,
            path: None,
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Open a file-backed collection, loading documents if the file exists.
    pub async fn open(path: impl Into<PathBuf>, schema: Schema) -> Result<Self> {
        let path = path.into();
        let documents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let mut documents = Vec::new();
                for line in contents.lines().filter(|line| !line.trim().is_empty()) {
                    documents.push(serde_json::from_str(line)?);
                }
                documents
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            schema,
            path: Some(path),
            documents: RwLock::new(documents),
        })
    }

    /// All documents in insertion order.
    pub async fn find_all(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    /// Validate `fields`, assign `id` and timestamps, append, persist.
    /// Returns the document as stored.
    pub async fn insert(&self, fields: Document) -> Result<Document> {
        let mut doc = self.schema.validate_create(&fields)?;
        doc.insert(ID.to_string(), Value::String(Uuid::new_v4().to_string()));
        if self.schema.timestamps() {
            let now = serde_json::to_value(Utc::now())?;
            doc.insert(CREATED_AT.to_string(), now.clone());
            doc.insert(UPDATED_AT.to_string(), now);
        }

        let mut documents = self.documents.write().await;
        documents.push(doc.clone());
        if let Err(err) = self.persist(&documents).await {
            documents.pop();
            return Err(err);
        }
        Ok(doc)
    }

    /// Merge a validated patch into the document matching `id`, refresh
    /// `updatedAt`, persist, and return the document after the change.
    pub async fn update(&self, id: &str, changes: Document) -> Result<Document> {
        let patch = self.schema.validate_update(&changes)?;

        let mut documents = self.documents.write().await;
        let index = position(&documents, id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        let before = documents[index].clone();

        for (name, value) in patch {
            documents[index].insert(name, value);
        }
        if self.schema.timestamps() {
            let now = serde_json::to_value(Utc::now())?;
            documents[index].insert(UPDATED_AT.to_string(), now);
        }

        if let Err(err) = self.persist(&documents).await {
            documents[index] = before;
            return Err(err);
        }
        Ok(documents[index].clone())
    }

    /// Remove and return the document matching `id`.
    pub async fn remove(&self, id: &str) -> Result<Document> {
        let mut documents = self.documents.write().await;
        let index = position(&documents, id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        let removed = documents.remove(index);
        if let Err(err) = self.persist(&documents).await {
            documents.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    /// Rewrite the backing file from the current state. A no-op for
    /// in-memory collections; called once more on shutdown.
    pub async fn flush(&self) -> Result<()> {
        let documents = self.documents.read().await;
        self.persist(&documents).await
    }

    async fn persist(&self, documents: &[Document]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut contents = String::new();
        for doc in documents {
            contents.push_str(&serde_json::to_string(doc)?);
            contents.push('\n');
        }
        let mut tmp = path.clone();
        tmp.as_mut_os_string().push(".tmp");
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

fn position(documents: &[Document], id: &str) -> Option<usize> {
    documents
        .iter()
        .position(|doc| doc.get(ID).and_then(Value::as_str) == Some(id))
}
