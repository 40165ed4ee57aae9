//! Unified application error type.
//! All modules (db, core, http, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid shift type: {0}")]
    InvalidShiftType(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Submission not found for docket {0}")]
    SubmissionNotFound(String),

    #[error("Snapshot not found for date {0}")]
    SnapshotNotFound(String),

    #[error("Unknown operator key: {0}")]
    UnknownOperator(i64),

    #[error("No operator is locked")]
    OperatorNotLocked,

    #[error("At least one {0} row is required")]
    RowMinimum(&'static str),

    // ---------------------------
    // Serialization / transport
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream inventory request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
