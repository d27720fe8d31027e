use std::net::SocketAddr;
use tracing::{info, warn};
use bookstore::core::controller::AppState;
use bookstore::core::repository::RepositoryStore;
use bookstore::core::router::build_router;
use bookstore::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let state = AppState::new("dev", RepositoryStore::in_memory());
    let addr: SocketAddr = state.config.listen_addr.parse()?;
    let app = build_router(state);

    info!(address = %addr, "Server starting");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}
