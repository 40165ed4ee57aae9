//! Inventory feature: a transparent pass-through to the third-party
//! inventory summary API, plus point-in-time snapshots persisted locally.
//! Proxy calls have no timeout beyond connect; a slow upstream holds the
//! request until it responds or errors, and failures surface as 502 with
//! `{error, detail}`.

use crate::db::{log, queries};
use crate::http::state::AppState;
use crate::utils::date::{parse_date, today};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info};

const SNAPSHOT_KINDS: &[&str] = &["live", "production", "sales", "forward-orders"];

fn upstream_url(state: &AppState, path: &str) -> String {
    format!(
        "{}/{}",
        state.cfg.inventory_api_base.trim_end_matches('/'),
        path
    )
}

/// Fetch one upstream feed as JSON, propagating query parameters.
async fn fetch_feed(
    state: &AppState,
    path: &str,
    params: &HashMap<String, String>,
) -> Result<(StatusCode, serde_json::Value), reqwest::Error> {
    let resp = state
        .http
        .get(upstream_url(state, path))
        .query(params)
        .send()
        .await?;
    let status = StatusCode::from_u16(resp.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.json().await?;
    Ok((status, body))
}

async fn proxy(state: AppState, path: &str, params: HashMap<String, String>) -> Response {
    match fetch_feed(&state, path, &params).await {
        Ok((status, body)) => (status, Json(body)).into_response(),
        Err(e) => {
            error!(feed = path, "inventory upstream failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "inventory upstream unavailable",
                    "detail": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// GET /api/inventory/live
pub async fn live_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    proxy(state, "live", params).await
}

/// GET /api/inventory/production?days=N
pub async fn production_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    proxy(state, "production", params).await
}

/// GET /api/inventory/sales?days=N
pub async fn sales_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    proxy(state, "sales", params).await
}

/// GET /api/inventory/forward-orders
pub async fn forward_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    proxy(state, "forward-orders", params).await
}

#[derive(Debug, Deserialize)]
pub struct SnapshotParams {
    /// Which feed to capture; defaults to the live summary.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// POST /api/inventory/snapshot: fetch the feed now and upsert today's
/// snapshot keyed by (date, type).
pub async fn snapshot_handler(
    State(state): State<AppState>,
    Query(params): Query<SnapshotParams>,
) -> Response {
    let kind = params.kind.unwrap_or_else(|| "live".to_string());
    if !SNAPSHOT_KINDS.contains(&kind.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("unknown snapshot type: {kind}") })),
        )
            .into_response();
    }

    let payload = match fetch_feed(&state, &kind, &HashMap::new()).await {
        Ok((status, body)) if status.is_success() => body,
        Ok((status, body)) => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "inventory upstream unavailable",
                    "detail": format!("upstream returned {status}: {body}"),
                })),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "inventory upstream unavailable",
                    "detail": e.to_string(),
                })),
            )
                .into_response();
        }
    };

    let date = today();
    let captured_at = chrono::Local::now().to_rfc3339();
    let pool = state.db.lock().await;

    match queries::upsert_snapshot(&pool.conn, date, &kind, &payload, &captured_at) {
        Ok(id) => {
            info!(kind = %kind, id, "inventory snapshot stored");
            if let Err(e) = log::journal(
                &pool.conn,
                "snapshot",
                &kind,
                &format!("snapshot {} captured for {}", id, date),
            ) {
                error!("failed to write internal log: {e}");
            }
            Json(json!({
                "success": true,
                "id": id,
                "date": date.format("%Y-%m-%d").to_string(),
                "type": kind,
            }))
            .into_response()
        }
        Err(e) => {
            error!(kind = %kind, "storing snapshot failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/inventory/snapshots
pub async fn snapshots_list_handler(State(state): State<AppState>) -> Response {
    let pool = state.db.lock().await;

    match queries::load_snapshots(&pool.conn) {
        Ok(snaps) => Json(snaps).into_response(),
        Err(e) => {
            error!("listing snapshots failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/inventory/snapshots/:date, 404 when nothing was captured.
pub async fn snapshots_by_date_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let Some(parsed) = parse_date(&date) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid date: {date}") })),
        )
            .into_response();
    };

    let pool = state.db.lock().await;

    match queries::load_snapshots_for_date(&pool.conn, parsed) {
        Ok(snaps) if snaps.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found" })),
        )
            .into_response(),
        Ok(snaps) => Json(snaps).into_response(),
        Err(e) => {
            error!(date = %date, "fetching snapshots failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
