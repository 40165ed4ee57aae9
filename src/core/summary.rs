//! Daily report aggregation: per-submission equipment/personnel hour
//! sums plus grand totals for one date. Missing row totals count as
//! zero, so a half-filled form never poisons the day's numbers.

use crate::models::report::StoredSubmission;
use crate::utils::time::round2;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub docket: String,
    pub operator_name: String,
    pub location_name: String,
    pub works_description: String,
    /// Display names of the equipment used on this shift, in row order.
    pub equipment_summary: Vec<String>,
    pub total_equipment_hrs: f64,
    pub total_personnel_hrs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub equipment_hrs: f64,
    pub personnel_hrs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub submissions: Vec<DailyRow>,
    pub totals: DailyTotals,
}

pub fn build_daily_report(date: NaiveDate, submissions: &[StoredSubmission]) -> DailyReport {
    let mut rows = Vec::with_capacity(submissions.len());
    let mut equipment_hrs = 0.0;
    let mut personnel_hrs = 0.0;

    for sub in submissions {
        let report = &sub.report;

        let eq_total: f64 = report
            .equipment
            .iter()
            .map(|e| e.total_hrs.unwrap_or(0.0))
            .sum();
        let pers_total: f64 = report
            .personnel
            .iter()
            .map(|p| p.total_hrs.unwrap_or(0.0))
            .sum();

        let equipment_summary = report
            .equipment
            .iter()
            .filter(|e| !e.is_blank())
            .map(|e| {
                if e.asset_id.is_empty() {
                    e.description.clone()
                } else {
                    e.asset_id.clone()
                }
            })
            .collect();

        equipment_hrs += eq_total;
        personnel_hrs += pers_total;

        rows.push(DailyRow {
            docket: report.docket.clone(),
            operator_name: report.operator_name.clone(),
            location_name: report.location_name.clone(),
            works_description: report.works_description.clone(),
            equipment_summary,
            total_equipment_hrs: round2(eq_total),
            total_personnel_hrs: round2(pers_total),
        });
    }

    DailyReport {
        date,
        submissions: rows,
        totals: DailyTotals {
            equipment_hrs: round2(equipment_hrs),
            personnel_hrs: round2(personnel_hrs),
        },
    }
}
