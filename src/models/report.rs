//! The shift report aggregate ("submission"). The docket string is the
//! natural key; re-submitting the same docket replaces the stored record.

use super::entry::{EquipmentEntry, PersonnelEntry};
use super::shift_type::ShiftType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sign-off block at the bottom of the form. The signature image is an
/// opaque encoded blob (data URL) captured by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SignatureBlock {
    #[serde(default)]
    pub name: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub position: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShiftReport {
    pub docket: String,
    pub opkey: Option<i64>,
    #[serde(default)]
    pub operator_name: String,
    pub location_key: Option<i64>,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub client: String,
    pub shift_date: Option<NaiveDate>,
    #[serde(default)]
    pub shift: ShiftType,
    #[serde(default)]
    pub has_breakdown: bool,
    #[serde(default)]
    pub breakdown_details: String,
    #[serde(default)]
    pub works_description: String,
    #[serde(default)]
    pub contractor_rep: SignatureBlock,
    #[serde(default)]
    pub client_rep: SignatureBlock,
    #[serde(default)]
    pub equipment: Vec<EquipmentEntry>,
    #[serde(default)]
    pub personnel: Vec<PersonnelEntry>,
    /// RFC 3339 timestamp set when the form is collected for submission.
    #[serde(default)]
    pub submitted_at: String,
}

/// A report as persisted by the server, with its row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub id: i64,
    #[serde(flatten)]
    pub report: ShiftReport,
}
