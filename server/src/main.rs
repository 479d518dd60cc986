use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::TodoModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let db_path = std::env::var("TODO_DB").unwrap_or_else(|_| "todos.jsonl".to_string());

    let model = TodoModel::open(&db_path).await?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, db = %db_path, "todo api listening");

    todo_server::run(listener, model.clone()).await?;

    model.close().await?;
    tracing::info!("todo store flushed");
    Ok(())
}
