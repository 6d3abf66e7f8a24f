mod config;
mod controllers;
mod init;
mod models;
mod prelude;
mod result;

pub use crate::result::Result;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<config::Config>,
    db: SqlitePool,
}

#[tokio::main]
async fn main() -> Result {
    init::logging::init_tracing();

    let cfg = config::build()?;
    let db = init::db::init_sqlite_pool(&cfg).await?;

    let state = AppState {
        cfg: Arc::new(cfg),
        db,
    };

    return run(state).await;
}

async fn run(state: AppState) -> Result {
    let addr: SocketAddr = state.cfg.server_addr().parse()?;
    let db = state.db.clone();

    tracing::info!("listening on http://{addr}");

    axum::Server::try_bind(&addr)?
        .serve(app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("server stopped");

    return Ok(());
}

pub fn app(state: AppState) -> Router {
    let router = Router::new();

    let router = controllers::add_routes(router);

    return router.layer(TraceLayer::new_for_http()).with_state(state);
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
