//! Read-only reference records supplied as JSON catalogs under the
//! configured data directory.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub opkey: i64,
    #[serde(default)]
    pub initial: String,
    pub first: String,
    pub last: String,
}

impl Operator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Site/location record; each site carries the client it belongs to,
/// denormalized onto the report when the site is picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub key: i64,
    pub name: String,
    pub client: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentAsset {
    pub key: i64,
    pub asset_id: String,
    #[serde(default)]
    pub description: String,
}
