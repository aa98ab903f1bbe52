use std::sync::Arc;

use notes_server::{
    app, config,
    pool::create_pool,
    repository::PgNoteRepository,
    service::NoteService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().inspect_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
    })?;

    // The pool lives for the whole process and is shared by every request
    let pool = create_pool(&cfg.database).inspect_err(|e| {
        tracing::error!("Failed to create database pool: {e}");
    })?;
    let repo = Arc::new(PgNoteRepository::new(pool));

    // Service creation
    let service = Arc::new(NoteService::new(repo));

    let router = app(service);

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr)
        .await
        .inspect_err(|e| tracing::error!("Failed to bind to {}: {e}", cfg.listen_addr))?;
    let addr = listener.local_addr()?;

    tracing::info!("Notes server starting, listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
