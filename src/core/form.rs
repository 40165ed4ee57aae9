//! Editable form state and its mapping to/from the ShiftReport aggregate.
//!
//! `FormState` mirrors the flat field values of the client form: every
//! cell is a raw string exactly as typed. `collect` assembles the typed
//! aggregate in document order (vector index = row order) and recomputes
//! all derived totals; `restore` rebuilds the editable state from a saved
//! aggregate, replacing current rows rather than merging into them.

use crate::core::hours::{equipment_total, personnel_total};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EquipmentEntry, PersonnelEntry};
use crate::models::report::{ShiftReport, SignatureBlock};
use crate::models::shift_type::ShiftType;
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, parse_time};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquipmentRowInput {
    pub asset_key: Option<i64>,
    pub asset_id: String,
    pub description: String,
    pub hrs_start: String,
    pub hrs_finish: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonnelRowInput {
    pub name: String,
    pub time_start: String,
    pub time_finish: String,
    pub break_hrs: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureInput {
    pub name: String,
    pub date: String,
    pub position: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub docket: String,
    pub opkey: Option<i64>,
    pub operator_name: String,
    pub location_key: Option<i64>,
    pub location_name: String,
    pub client: String,
    pub shift_date: String,
    pub shift: ShiftType,
    pub has_breakdown: bool,
    pub breakdown_details: String,
    pub works_description: String,
    pub contractor_rep: SignatureInput,
    pub client_rep: SignatureInput,
    pub equipment_rows: Vec<EquipmentRowInput>,
    pub personnel_rows: Vec<PersonnelRowInput>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Fresh form: one blank row per table, everything else empty.
    pub fn new() -> Self {
        Self {
            docket: String::new(),
            opkey: None,
            operator_name: String::new(),
            location_key: None,
            location_name: String::new(),
            client: String::new(),
            shift_date: String::new(),
            shift: ShiftType::Day,
            has_breakdown: false,
            breakdown_details: String::new(),
            works_description: String::new(),
            contractor_rep: SignatureInput::default(),
            client_rep: SignatureInput::default(),
            equipment_rows: vec![EquipmentRowInput::default()],
            personnel_rows: vec![PersonnelRowInput::default()],
        }
    }

    pub fn add_equipment_row(&mut self) {
        self.equipment_rows.push(EquipmentRowInput::default());
    }

    pub fn add_personnel_row(&mut self) {
        self.personnel_rows.push(PersonnelRowInput::default());
    }

    /// Each table keeps a minimum of one row; removing the last one is
    /// rejected, matching the form's behavior.
    pub fn remove_equipment_row(&mut self, index: usize) -> AppResult<()> {
        if self.equipment_rows.len() <= 1 {
            return Err(AppError::RowMinimum("equipment"));
        }
        if index >= self.equipment_rows.len() {
            return Err(AppError::Other(format!("no equipment row {}", index)));
        }
        self.equipment_rows.remove(index);
        Ok(())
    }

    pub fn remove_personnel_row(&mut self, index: usize) -> AppResult<()> {
        if self.personnel_rows.len() <= 1 {
            return Err(AppError::RowMinimum("personnel"));
        }
        if index >= self.personnel_rows.len() {
            return Err(AppError::Other(format!("no personnel row {}", index)));
        }
        self.personnel_rows.remove(index);
        Ok(())
    }

    /// Assemble the aggregate from the current field values. Totals are
    /// recomputed here, never carried over from stale state.
    pub fn collect(&self, submitted_at: String) -> ShiftReport {
        let equipment = self
            .equipment_rows
            .iter()
            .map(|row| {
                let start = parse_num(&row.hrs_start);
                let finish = parse_num(&row.hrs_finish);
                // An untouched pair of cells yields no total; a single
                // filled cell computes against 0, as the form does.
                let total = if start.is_none() && finish.is_none() {
                    None
                } else {
                    equipment_total(start.unwrap_or(0.0), finish.unwrap_or(0.0))
                };
                EquipmentEntry {
                    asset_key: row.asset_key,
                    asset_id: row.asset_id.clone(),
                    description: row.description.clone(),
                    hrs_start: start,
                    hrs_finish: finish,
                    total_hrs: total,
                }
            })
            .collect();

        let personnel = self
            .personnel_rows
            .iter()
            .map(|row| {
                let start = parse_time(&row.time_start);
                let finish = parse_time(&row.time_finish);
                let break_hrs = parse_num(&row.break_hrs).unwrap_or(0.0);
                // Missing either endpoint: no computation at all.
                let total = match (start, finish) {
                    (Some(s), Some(f)) => personnel_total(s, f, break_hrs),
                    _ => None,
                };
                PersonnelEntry {
                    name: row.name.clone(),
                    time_start: start,
                    time_finish: finish,
                    break_hrs,
                    total_hrs: total,
                }
            })
            .collect();

        ShiftReport {
            docket: self.docket.clone(),
            opkey: self.opkey,
            operator_name: self.operator_name.clone(),
            location_key: self.location_key,
            location_name: self.location_name.clone(),
            client: self.client.clone(),
            shift_date: parse_date(&self.shift_date),
            shift: self.shift,
            has_breakdown: self.has_breakdown,
            breakdown_details: self.breakdown_details.clone(),
            works_description: self.works_description.clone(),
            contractor_rep: collect_signature(&self.contractor_rep),
            client_rep: collect_signature(&self.client_rep),
            equipment,
            personnel,
            submitted_at,
        }
    }

    /// Rebuild editable state from a saved aggregate (draft restore or
    /// edit-by-docket). Row vectors are replaced wholesale; an aggregate
    /// with an empty table still gets its minimum blank row.
    pub fn restore(report: &ShiftReport) -> Self {
        let mut equipment_rows: Vec<EquipmentRowInput> = report
            .equipment
            .iter()
            .map(|e| EquipmentRowInput {
                asset_key: e.asset_key,
                asset_id: e.asset_id.clone(),
                description: e.description.clone(),
                hrs_start: fmt_num(e.hrs_start),
                hrs_finish: fmt_num(e.hrs_finish),
            })
            .collect();
        if equipment_rows.is_empty() {
            equipment_rows.push(EquipmentRowInput::default());
        }

        let mut personnel_rows: Vec<PersonnelRowInput> = report
            .personnel
            .iter()
            .map(|p| PersonnelRowInput {
                name: p.name.clone(),
                time_start: p.time_start.map(format_time).unwrap_or_default(),
                time_finish: p.time_finish.map(format_time).unwrap_or_default(),
                break_hrs: p.break_hrs.to_string(),
            })
            .collect();
        if personnel_rows.is_empty() {
            personnel_rows.push(PersonnelRowInput::default());
        }

        Self {
            docket: report.docket.clone(),
            opkey: report.opkey,
            operator_name: report.operator_name.clone(),
            location_key: report.location_key,
            location_name: report.location_name.clone(),
            client: report.client.clone(),
            shift_date: report.shift_date.map(format_date).unwrap_or_default(),
            shift: report.shift,
            has_breakdown: report.has_breakdown,
            breakdown_details: report.breakdown_details.clone(),
            works_description: report.works_description.clone(),
            contractor_rep: restore_signature(&report.contractor_rep),
            client_rep: restore_signature(&report.client_rep),
            equipment_rows,
            personnel_rows,
        }
    }
}

fn collect_signature(input: &SignatureInput) -> SignatureBlock {
    SignatureBlock {
        name: input.name.clone(),
        date: parse_date(&input.date),
        position: input.position.clone(),
        image: input.image.clone(),
    }
}

fn restore_signature(block: &SignatureBlock) -> SignatureInput {
    SignatureInput {
        name: block.name.clone(),
        date: block.date.map(format_date).unwrap_or_default(),
        position: block.position.clone(),
        image: block.image.clone(),
    }
}

fn parse_num(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { None } else { t.parse().ok() }
}

fn fmt_num(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}
