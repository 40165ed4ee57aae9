//! Daily aggregate report endpoint.

use crate::core::summary::build_daily_report;
use crate::db::queries;
use crate::http::state::AppState;
use crate::utils::date::parse_date;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    pub date: String,
}

/// GET /api/reports/daily?date=YYYY-MM-DD
pub async fn daily_handler(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> Response {
    let Some(date) = parse_date(&params.date) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid date: {}", params.date) })),
        )
            .into_response();
    };

    let pool = state.db.lock().await;

    match queries::load_for_date(&pool.conn, date) {
        Ok(subs) => Json(build_daily_report(date, &subs)).into_response(),
        Err(e) => {
            error!(date = %params.date, "daily report failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
