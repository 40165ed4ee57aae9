use shiftdocket::core::form::{EquipmentRowInput, FormState, PersonnelRowInput};
use shiftdocket::core::validate::{ValidationError, validate};
use shiftdocket::errors::AppError;

mod common;
use common::{parse_hm, sample_report};

fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.docket = "12 - 03-06-26".to_string();
    form.opkey = Some(12);
    form.operator_name = "Dana Reeve".to_string();
    form.location_key = Some(3);
    form.location_name = "North Pit".to_string();
    form.client = "Stockyard Holdings".to_string();
    form.shift_date = "2026-06-03".to_string();
    form.works_description = "Haul road maintenance".to_string();
    form.equipment_rows[0] = EquipmentRowInput {
        asset_key: Some(7),
        asset_id: "EX17".to_string(),
        description: "Excavator".to_string(),
        hrs_start: "120".to_string(),
        hrs_finish: "128.5".to_string(),
    };
    form.personnel_rows[0] = PersonnelRowInput {
        name: "Dana Reeve".to_string(),
        time_start: "08:00".to_string(),
        time_finish: "17:30".to_string(),
        break_hrs: "0.5".to_string(),
    };
    form
}

#[test]
fn test_collect_recomputes_totals() {
    let report = filled_form().collect("2026-06-03T17:45:00+09:30".to_string());
    assert_eq!(report.equipment[0].total_hrs, Some(8.5));
    assert_eq!(report.personnel[0].total_hrs, Some(9.0));
    assert_eq!(report.personnel[0].time_start, Some(parse_hm("08:00")));
}

#[test]
fn test_collect_blank_equipment_cells_leave_total_unset() {
    let mut form = filled_form();
    form.equipment_rows[0].hrs_start = String::new();
    form.equipment_rows[0].hrs_finish = String::new();
    let report = form.collect(String::new());
    assert_eq!(report.equipment[0].hrs_start, None);
    assert_eq!(report.equipment[0].total_hrs, None);
}

#[test]
fn test_collect_single_equipment_cell_computes_against_zero() {
    let mut form = filled_form();
    form.equipment_rows[0].hrs_start = String::new();
    form.equipment_rows[0].hrs_finish = "6.5".to_string();
    let report = form.collect(String::new());
    assert_eq!(report.equipment[0].total_hrs, Some(6.5));
}

#[test]
fn test_collect_personnel_without_both_times_has_no_total() {
    let mut form = filled_form();
    form.personnel_rows[0].time_finish = String::new();
    let report = form.collect(String::new());
    assert_eq!(report.personnel[0].total_hrs, None);
}

#[test]
fn test_collect_unparsable_break_defaults_to_zero() {
    let mut form = filled_form();
    form.personnel_rows[0].break_hrs = "lunch".to_string();
    let report = form.collect(String::new());
    assert_eq!(report.personnel[0].break_hrs, 0.0);
    assert_eq!(report.personnel[0].total_hrs, Some(9.5));
}

#[test]
fn test_restore_round_trips_collected_report() {
    let submitted_at = "2026-06-03T17:45:00+09:30".to_string();
    let report = filled_form().collect(submitted_at.clone());
    let restored = FormState::restore(&report);
    assert_eq!(restored.collect(submitted_at), report);
}

#[test]
fn test_restore_empty_tables_pads_one_blank_row() {
    let mut report = sample_report("12 - 03-06-26", "2026-06-03");
    report.equipment.clear();
    report.personnel.clear();
    let restored = FormState::restore(&report);
    assert_eq!(restored.equipment_rows.len(), 1);
    assert_eq!(restored.personnel_rows.len(), 1);
    assert!(restored.equipment_rows[0].asset_id.is_empty());
}

#[test]
fn test_row_minimum_is_enforced() {
    let mut form = FormState::new();
    assert!(matches!(
        form.remove_equipment_row(0),
        Err(AppError::RowMinimum("equipment"))
    ));
    form.add_equipment_row();
    form.remove_equipment_row(0).unwrap();
    assert_eq!(form.equipment_rows.len(), 1);

    assert!(matches!(
        form.remove_personnel_row(0),
        Err(AppError::RowMinimum("personnel"))
    ));
}

#[test]
fn test_validate_reports_all_missing_fields_in_order() {
    let report = FormState::new().collect(String::new());
    let errors = validate(&report);
    assert_eq!(
        errors,
        vec![
            ValidationError::MissingDocket,
            ValidationError::MissingLocation,
            ValidationError::MissingClient,
            ValidationError::MissingOperator,
            ValidationError::MissingWorksDescription,
        ]
    );
    assert_eq!(errors[0].message(), "Please enter a Docket Number");
    assert_eq!(errors[0].key(), "missing_docket");
}

#[test]
fn test_validate_passes_complete_report() {
    let report = sample_report("12 - 03-06-26", "2026-06-03");
    assert!(validate(&report).is_empty());
}

#[test]
fn test_validate_ignores_whitespace_only_values() {
    let mut report = sample_report("12 - 03-06-26", "2026-06-03");
    report.client = "   ".to_string();
    let errors = validate(&report);
    assert_eq!(errors, vec![ValidationError::MissingClient]);
}
