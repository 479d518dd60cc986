//! Client for the todo API.
//!
//! # Overview
//!
//! [`TodoApi`] drives the four server operations over HTTP and decodes the
//! JSON envelopes into typed DTOs. The DTOs are declared here rather than
//! shared with the server crate, so the client builds on its own; the
//! workspace integration test keeps the two sides in sync.

pub mod api;
pub mod error;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use types::{NewTodo, Todo, TodoList, TodoMutation, TodoPatch};
