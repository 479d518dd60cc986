//! Persistence rules for stored documents.
//!
//! # Design
//!
//! A [`Schema`] declares which fields a collection accepts, the kind of
//! value each holds, and whether the store maintains `createdAt` and
//! `updatedAt`. Validation is strict: fields the schema does not declare
//! are dropped before they reach the store, which also keeps `id` and the
//! timestamps out of client patches. Messages produced here are the
//! user-visible validation errors.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::store::Document;

/// Name of the store-managed creation timestamp.
pub const CREATED_AT: &str = "createdAt";

/// Name of the store-managed modification timestamp.
pub const UPDATED_AT: &str = "updatedAt";

/// Kind of value a declared field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON boolean.
    Flag,
}

/// Declaration of a single document field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    non_empty: bool,
}

impl FieldSpec {
    /// A string field.
    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
            non_empty: false,
        }
    }

    /// A boolean field.
    pub fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Flag,
            required: false,
            non_empty: false,
        }
    }

    /// The field must be present when a document is created.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reject the empty string. Only meaningful for text fields.
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    fn check(&self, value: &Value) -> Result<()> {
        match self.kind {
            FieldKind::Text => match value.as_str() {
                Some("") if self.non_empty => Err(Error::Validation(format!(
                    "{} must not be empty",
                    self.name
                ))),
                Some(_) => Ok(()),
                None => Err(Error::Validation(format!(
                    "{} must be a string",
                    self.name
                ))),
            },
            FieldKind::Flag => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(Error::Validation(format!(
                        "{} must be a boolean",
                        self.name
                    )))
                }
            }
        }
    }
}

/// Field declarations and timestamp policy for one collection.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    timestamps: bool,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            timestamps: false,
        }
    }

    /// Maintain `createdAt` and `updatedAt` on every write.
    pub fn with_timestamps(mut self) -> Self {
        self.timestamps = true;
        self
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Validate fields for a new document. Every required field must be
    /// present and well-kinded; undeclared fields are dropped.
    pub fn validate_create(&self, fields: &Document) -> Result<Document> {
        let mut doc = Document::new();
        for spec in &self.fields {
            match fields.get(spec.name) {
                Some(value) => {
                    spec.check(value)?;
                    doc.insert(spec.name.to_string(), value.clone());
                }
                None if spec.required => {
                    return Err(Error::Validation(format!("{} is required", spec.name)));
                }
                None => {}
            }
        }
        Ok(doc)
    }

    /// Validate a partial update. Supplied declared fields must be
    /// well-kinded; everything else, including `id` and the timestamps,
    /// is dropped. An empty patch is valid.
    pub fn validate_update(&self, changes: &Document) -> Result<Document> {
        let mut patch = Document::new();
        for spec in &self.fields {
            if let Some(value) = changes.get(spec.name) {
                spec.check(value)?;
                patch.insert(spec.name.to_string(), value.clone());
            }
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSpec::text("name").required().non_empty(),
            FieldSpec::text("description").required(),
            FieldSpec::flag("status").required(),
            FieldSpec::text("notes"),
        ])
        .with_timestamps()
    }

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn create_accepts_a_complete_document() {
        let fields = doc(json!({ "name": "Test", "description": "", "status": false }));
        let validated = schema().validate_create(&fields).unwrap();
        assert_eq!(validated.len(), 3);
        assert_eq!(validated["name"], "Test");
    }

    #[test]
    fn missing_required_field_is_reported_by_name() {
        let fields = doc(json!({ "description": "x", "status": false }));
        let err = schema().validate_create(&fields).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn wrong_kind_is_reported_by_name() {
        let fields = doc(json!({ "name": "Test", "description": "x", "status": "yes" }));
        let err = schema().validate_create(&fields).unwrap_err();
        assert_eq!(err.to_string(), "status must be a boolean");

        let fields = doc(json!({ "name": 7, "description": "x", "status": true }));
        let err = schema().validate_create(&fields).unwrap_err();
        assert_eq!(err.to_string(), "name must be a string");
    }

    #[test]
    fn empty_name_is_rejected_but_empty_description_is_allowed() {
        let fields = doc(json!({ "name": "", "description": "x", "status": false }));
        let err = schema().validate_create(&fields).unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");

        let fields = doc(json!({ "name": "Test", "description": "", "status": false }));
        assert!(schema().validate_create(&fields).is_ok());
    }

    #[test]
    fn undeclared_fields_are_dropped_on_create() {
        let fields = doc(json!({
            "name": "Test",
            "description": "x",
            "status": false,
            "priority": "high"
        }));
        let validated = schema().validate_create(&fields).unwrap();
        assert!(validated.get("priority").is_none());
    }

    #[test]
    fn optional_fields_are_kept_when_present() {
        let fields = doc(json!({
            "name": "Test",
            "description": "x",
            "status": false,
            "notes": "extra"
        }));
        let validated = schema().validate_create(&fields).unwrap();
        assert_eq!(validated["notes"], "extra");
    }

    #[test]
    fn update_keeps_only_declared_fields() {
        let changes = doc(json!({
            "name": "Renamed",
            "id": "11111111-1111-1111-1111-111111111111",
            "createdAt": "2020-01-01T00:00:00Z",
            "priority": "high"
        }));
        let patch = schema().validate_update(&changes).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch["name"], "Renamed");
    }

    #[test]
    fn update_checks_kinds_of_supplied_fields() {
        let changes = doc(json!({ "status": "done" }));
        let err = schema().validate_update(&changes).unwrap_err();
        assert_eq!(err.to_string(), "status must be a boolean");
    }

    #[test]
    fn update_rejects_an_empty_name() {
        let changes = doc(json!({ "name": "" }));
        let err = schema().validate_update(&changes).unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn empty_update_is_valid() {
        let patch = schema().validate_update(&Document::new()).unwrap();
        assert!(patch.is_empty());
    }
}
