//! Required-field validation for a shift report. All violations are
//! reported, not just the first, and always in the same order so the
//! notice list is stable across runs.

use crate::models::report::ShiftReport;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingDocket,
    MissingLocation,
    MissingClient,
    MissingOperator,
    MissingWorksDescription,
}

impl ValidationError {
    /// Stable key used by clients to pick a user-facing message.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::MissingDocket => "missing_docket",
            ValidationError::MissingLocation => "missing_location",
            ValidationError::MissingClient => "missing_client",
            ValidationError::MissingOperator => "missing_operator",
            ValidationError::MissingWorksDescription => "missing_works_description",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingDocket => "Please enter a Docket Number",
            ValidationError::MissingLocation => "Please enter Site/Location",
            ValidationError::MissingClient => "Please enter Client name",
            ValidationError::MissingOperator => "Please enter Operator Name",
            ValidationError::MissingWorksDescription => "Please enter Works Description",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn validate(report: &ShiftReport) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if report.docket.trim().is_empty() {
        errors.push(ValidationError::MissingDocket);
    }
    if report.location_name.trim().is_empty() {
        errors.push(ValidationError::MissingLocation);
    }
    if report.client.trim().is_empty() {
        errors.push(ValidationError::MissingClient);
    }
    if report.operator_name.trim().is_empty() {
        errors.push(ValidationError::MissingOperator);
    }
    if report.works_description.trim().is_empty() {
        errors.push(ValidationError::MissingWorksDescription);
    }

    errors
}
