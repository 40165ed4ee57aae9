//! Docket numbers: the human-readable natural key of a shift report,
//! derived from the locked operator and the shift date.

use crate::utils::date::docket_date;
use chrono::NaiveDate;

/// Format: `OPKEY - DD-MM-YY`, e.g. `14 - 03-06-26`.
pub fn generate(opkey: i64, date: NaiveDate) -> String {
    format!("{} - {}", opkey, docket_date(date))
}

/// Extract the operator key back out of a docket string, if well-formed.
pub fn opkey_of(docket: &str) -> Option<i64> {
    docket.split(" - ").next()?.trim().parse().ok()
}
