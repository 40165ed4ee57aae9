//! Shift report endpoints: submit (upsert by docket), list, get.

use crate::db::{log, queries};
use crate::http::state::AppState;
use crate::models::report::ShiftReport;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, info};

/// POST /api/submissions: full aggregate in, `{success, id, docket}` out.
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(report): Json<ShiftReport>,
) -> Response {
    let mut pool = state.db.lock().await;

    match queries::upsert_submission(&mut pool.conn, &report) {
        Ok((id, docket)) => {
            info!(docket = %docket, id, "submission stored");
            if let Err(e) = log::journal(
                &pool.conn,
                "submit",
                &docket,
                &format!("submission {} stored", id),
            ) {
                error!("failed to write internal log: {e}");
            }
            (
                StatusCode::OK,
                Json(json!({ "success": true, "id": id, "docket": docket })),
            )
                .into_response()
        }
        Err(e) => {
            error!(docket = %report.docket, "submission failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/submissions: every record with nested entry arrays.
pub async fn list_handler(State(state): State<AppState>) -> Response {
    let pool = state.db.lock().await;

    match queries::load_all_submissions(&pool.conn) {
        Ok(subs) => Json(subs).into_response(),
        Err(e) => {
            error!("listing submissions failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/submissions/:docket: single record, 404 when absent.
pub async fn get_handler(State(state): State<AppState>, Path(docket): Path<String>) -> Response {
    let pool = state.db.lock().await;

    match queries::load_by_docket(&pool.conn, &docket) {
        Ok(Some(sub)) => Json(sub).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(docket = %docket, "fetching submission failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
