//! HTTP server initialization and routing.
use crate::gantt::configure_gantt_routes;
use crate::metrics::configure_metrics_routes;
use crate::shared::state::AppState;
use crate::tasks::configure_task_routes;
use crate::todos::configure_todo_routes;
use crate::users::configure_user_routes;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use log::info;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the ganttboard API" }))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Assembles the full application router. The UI is served from another
/// origin, so CORS stays wide open just like the original worker.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(configure_todo_routes())
        .merge(configure_user_routes())
        .merge(configure_task_routes())
        .merge(configure_gantt_routes())
        .merge(configure_metrics_routes())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
