//! Line-item rows of a shift report. Row order is first-class: the
//! position inside the report's vectors is the persisted `row_order`.

use crate::utils::time::serde_hm_opt;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One machine line on the equipment table.
/// `total_hrs` is derived (finish − start) and kept only when the
/// interval is valid; a negative interval leaves it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EquipmentEntry {
    /// Catalog key of the asset, when picked from the equipment list.
    pub asset_key: Option<i64>,
    /// Display id as written on the machine (e.g. "EX17").
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub description: String,
    pub hrs_start: Option<f64>,
    pub hrs_finish: Option<f64>,
    pub total_hrs: Option<f64>,
}

impl EquipmentEntry {
    /// Blank placeholder rows carry neither an asset key nor an id; the
    /// reconciler skips them instead of erroring.
    pub fn is_blank(&self) -> bool {
        self.asset_key.is_none() && self.asset_id.trim().is_empty()
    }
}

/// One person line on the personnel table. Times are wall-clock HH:MM;
/// an overnight shift is a finish earlier than the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonnelEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "serde_hm_opt")]
    pub time_start: Option<NaiveTime>,
    #[serde(default, with = "serde_hm_opt")]
    pub time_finish: Option<NaiveTime>,
    #[serde(default)]
    pub break_hrs: f64,
    pub total_hrs: Option<f64>,
}

impl PersonnelEntry {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}
