//! HTTP API for the todo service.
//!
//! # Overview
//!
//! Four thin layers: route handlers translate HTTP to calls on
//! [`TodoModel`], the model wraps a schema-bound document [`Collection`],
//! the schema holds the persistence rules, and [`Error`] is the single
//! boundary mapping failures to responses.
//!
//! # Design
//!
//! - State is injected: [`app`] takes the model, nothing reaches for
//!   globals, and tests construct as many instances as they like.
//! - Handlers return `Result` and never classify errors themselves.
//! - [`run`] serves until ctrl-c or SIGTERM so the caller can flush the
//!   store afterwards.
//!
//! [`Collection`]: store::Collection

pub mod error;
pub mod handlers;
pub mod model;
pub mod schema;
pub mod store;
pub mod types;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{Error, Result};
pub use handlers::{TodoList, TodoMutation};
pub use model::TodoModel;
pub use types::TodoItem;

/// Build the `/todos` router around an injected model.
pub fn app(model: TodoModel) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::add_todo))
        .route(
            "/todos/{id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(model)
}

/// Serve the API on `listener` until shutdown is requested.
pub async fn run(listener: TcpListener, model: TodoModel) -> std::io::Result<()> {
    axum::serve(listener, app(model))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
