//! Request handlers: HTTP in, model call, JSON envelope out.
//!
//! Each handler is a straight translation with no business logic and no
//! error handling of its own; failures propagate to the [`Error`] response
//! boundary. Mutation envelopes carry the affected item plus the refreshed
//! collection so a thin client can repaint without a second round trip.
//!
//! [`Error`]: crate::error::Error

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::TodoModel;
use crate::store::Document;
use crate::types::TodoItem;

/// Envelope for `GET /todos`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<TodoItem>,
}

/// Envelope for create, update and delete: a message, the affected item,
/// and the refreshed collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoMutation {
    pub message: String,
    pub todo: TodoItem,
    pub todos: Vec<TodoItem>,
}

pub async fn list_todos(State(model): State<TodoModel>) -> Result<Json<TodoList>> {
    let todos = model.list().await?;
    Ok(Json(TodoList { todos }))
}

pub async fn add_todo(
    State(model): State<TodoModel>,
    Json(fields): Json<Document>,
) -> Result<(StatusCode, Json<TodoMutation>)> {
    let todo = model.create(fields).await?;
    let todos = model.list().await?;
    Ok((
        StatusCode::CREATED,
        Json(TodoMutation {
            message: "Todo added".to_string(),
            todo,
            todos,
        }),
    ))
}

pub async fn update_todo(
    State(model): State<TodoModel>,
    Path(id): Path<String>,
    Json(changes): Json<Document>,
) -> Result<Json<TodoMutation>> {
    let todo = model.update_by_id(&id, changes).await?;
    let todos = model.list().await?;
    Ok(Json(TodoMutation {
        message: "Todo updated".to_string(),
        todo,
        todos,
    }))
}

pub async fn delete_todo(
    State(model): State<TodoModel>,
    Path(id): Path<String>,
) -> Result<Json<TodoMutation>> {
    let todo = model.delete_by_id(&id).await?;
    let todos = model.list().await?;
    Ok(Json(TodoMutation {
        message: "Todo deleted".to_string(),
        todo,
        todos,
    }))
}
