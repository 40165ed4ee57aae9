//! Reference catalog endpoints: the operator, site and equipment lists
//! the client form is populated from.

use crate::http::state::AppState;
use crate::refdata;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::path::Path;
use tracing::error;

fn catalog_response<T: serde::Serialize>(
    name: &str,
    result: crate::errors::AppResult<Vec<T>>,
) -> Response {
    match result {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            error!(catalog = name, "loading reference catalog failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/refdata/operators
pub async fn operators_handler(State(state): State<AppState>) -> Response {
    catalog_response(
        "operators",
        refdata::load_operators(Path::new(&state.cfg.data_dir)),
    )
}

/// GET /api/refdata/sites
pub async fn sites_handler(State(state): State<AppState>) -> Response {
    catalog_response("sites", refdata::load_sites(Path::new(&state.cfg.data_dir)))
}

/// GET /api/refdata/equipment
pub async fn equipment_handler(State(state): State<AppState>) -> Response {
    catalog_response(
        "equipment",
        refdata::load_equipment(Path::new(&state.cfg.data_dir)),
    )
}
