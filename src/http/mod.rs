//! HTTP surface: router assembly and the serve loop.

pub mod assets;
pub mod inventory;
pub mod refdata;
pub mod reports;
pub mod state;
pub mod submissions;

use crate::errors::{AppError, AppResult};
use axum::Json;
use axum::extract::DefaultBodyLimit;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use state::AppState;
use tracing::info;

/// Signature images ride inside the JSON body, so the limit is generous.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/submissions",
            post(submissions::submit_handler).get(submissions::list_handler),
        )
        .route("/api/submissions/:docket", get(submissions::get_handler))
        .route("/api/reports/daily", get(reports::daily_handler))
        .route("/api/refdata/operators", get(refdata::operators_handler))
        .route("/api/refdata/sites", get(refdata::sites_handler))
        .route("/api/refdata/equipment", get(refdata::equipment_handler))
        .route("/api/inventory/live", get(inventory::live_handler))
        .route(
            "/api/inventory/production",
            get(inventory::production_handler),
        )
        .route("/api/inventory/sales", get(inventory::sales_handler))
        .route(
            "/api/inventory/forward-orders",
            get(inventory::forward_orders_handler),
        )
        .route(
            "/api/inventory/snapshot",
            post(inventory::snapshot_handler),
        )
        .route(
            "/api/inventory/snapshots",
            get(inventory::snapshots_list_handler),
        )
        .route(
            "/api/inventory/snapshots/:date",
            get(inventory::snapshots_by_date_handler),
        )
        .fallback(assets::shell_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(state: AppState, bind_addr: &str) -> AppResult<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Config(format!("cannot bind {bind_addr}: {e}")))?;
    info!(addr = bind_addr, "shiftdocket listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| AppError::Other(format!("server error: {e}")))?;

    Ok(())
}
