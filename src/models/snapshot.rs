use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of one upstream inventory feed, keyed by
/// (snapshot_date, kind) with upsert semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub id: i64,
    pub snapshot_date: NaiveDate,
    pub kind: String,
    pub payload: serde_json::Value,
    /// RFC 3339 capture timestamp.
    pub captured_at: String,
}
