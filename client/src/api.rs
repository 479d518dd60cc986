//! Blocking HTTP client for the todo API.
//!
//! # Design
//! `TodoApi` wraps one ureq agent and exposes a method per server
//! operation, returning the decoded envelope. The agent is configured so
//! non-2xx statuses come back as responses rather than transport errors,
//! keeping status interpretation in `check_status` where the error
//! taxonomy lives.

use uuid::Uuid;

use crate::error::ApiError;
use crate::types::{NewTodo, Todo, TodoList, TodoMutation, TodoPatch};

/// Client bound to one todo API server.
#[derive(Debug, Clone)]
pub struct TodoApi {
    agent: ureq::Agent,
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every todo.
    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let mut response = self.agent.get(format!("{}/todos", self.base_url)).call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        check_status(status, 200, &body)?;
        let list: TodoList = serde_json::from_str(&body)?;
        Ok(list.todos)
    }

    /// Create a todo; the envelope carries it plus the refreshed list.
    pub fn create(&self, input: &NewTodo) -> Result<TodoMutation, ApiError> {
        let payload = serde_json::to_string(input)?;
        let mut response = self
            .agent
            .post(format!("{}/todos", self.base_url))
            .content_type("application/json")
            .send(payload.as_bytes())?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        check_status(status, 201, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Apply a partial update; the envelope's `todo` is the item after the
    /// change.
    pub fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<TodoMutation, ApiError> {
        let payload = serde_json::to_string(patch)?;
        let mut response = self
            .agent
            .put(format!("{}/todos/{id}", self.base_url))
            .content_type("application/json")
            .send(payload.as_bytes())?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        check_status(status, 200, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete a todo; the envelope's `todo` is the removed item.
    pub fn delete(&self, id: Uuid) -> Result<TodoMutation, ApiError> {
        let mut response = self
            .agent
            .delete(format!("{}/todos/{id}", self.base_url))
            .call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        check_status(status, 200, &body)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(status: u16, expected: u16, body: &str) -> Result<(), ApiError> {
    if status == expected {
        return Ok(());
    }
    if status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let api = TodoApi::new("http://localhost:3000/");
        assert_eq!(api.base_url, "http://localhost:3000");
    }

    #[test]
    fn check_status_accepts_the_expected_code() {
        assert!(check_status(200, 200, "").is_ok());
        assert!(check_status(201, 201, "").is_ok());
    }

    #[test]
    fn check_status_maps_404_to_not_found() {
        let err = check_status(404, 200, "").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn check_status_keeps_status_and_body_otherwise() {
        let err = check_status(500, 200, "internal server error").unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn list_envelope_decodes() {
        let body = r#"{"todos":[{
            "id":"00000000-0000-0000-0000-000000000001",
            "name":"Test","description":"2%","status":false,
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"
        }]}"#;
        let list: TodoList = serde_json::from_str(body).unwrap();
        assert_eq!(list.todos.len(), 1);
        assert_eq!(list.todos[0].name, "Test");
    }

    #[test]
    fn mutation_envelope_decodes() {
        let body = r#"{
            "message":"Todo added",
            "todo":{
                "id":"00000000-0000-0000-0000-000000000001",
                "name":"Test","description":"","status":false,
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"
            },
            "todos":[{
                "id":"00000000-0000-0000-0000-000000000001",
                "name":"Test","description":"","status":false,
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"
            }]
        }"#;
        let mutation: TodoMutation = serde_json::from_str(body).unwrap();
        assert_eq!(mutation.message, "Todo added");
        assert_eq!(mutation.todos[0], mutation.todo);
    }

    #[test]
    fn mutation_envelope_bad_json_is_a_json_error() {
        let err = serde_json::from_str::<TodoMutation>("not json").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Json(_)));
    }
}
