use shiftdocket::core::summary::build_daily_report;
use shiftdocket::models::entry::{EquipmentEntry, PersonnelEntry};
use shiftdocket::models::report::StoredSubmission;

mod common;
use common::{parse_hm, parse_ymd, sample_report};

fn stored(id: i64, docket: &str) -> StoredSubmission {
    StoredSubmission {
        id,
        report: sample_report(docket, "2026-06-03"),
    }
}

#[test]
fn test_daily_report_sums_per_submission_and_grand_totals() {
    let first = stored(1, "12 - 03-06-26"); // 8.5 equipment, 9.0 personnel

    let mut second = stored(2, "27 - 03-06-26");
    second.report.operator_name = "Mio Kato".to_string();
    second.report.equipment = vec![
        EquipmentEntry {
            asset_key: Some(9),
            asset_id: "DZ3".to_string(),
            description: "Dozer".to_string(),
            hrs_start: Some(40.0),
            hrs_finish: Some(46.0),
            total_hrs: Some(6.0),
        },
        EquipmentEntry {
            asset_key: None,
            asset_id: "GR1".to_string(),
            description: String::new(),
            hrs_start: Some(10.0),
            hrs_finish: Some(14.0),
            total_hrs: Some(4.0),
        },
    ];
    second.report.personnel = vec![PersonnelEntry {
        name: "Mio Kato".to_string(),
        time_start: Some(parse_hm("06:00")),
        time_finish: Some(parse_hm("14:00")),
        break_hrs: 0.5,
        total_hrs: Some(7.5),
    }];

    let report = build_daily_report(parse_ymd("2026-06-03"), &[first, second]);

    assert_eq!(report.submissions.len(), 2);
    assert_eq!(report.submissions[0].total_equipment_hrs, 8.5);
    assert_eq!(report.submissions[1].total_equipment_hrs, 10.0);
    assert_eq!(report.totals.equipment_hrs, 18.5);
    assert_eq!(report.totals.personnel_hrs, 16.5);
}

#[test]
fn test_missing_row_totals_count_as_zero() {
    let mut sub = stored(1, "12 - 03-06-26");
    sub.report.equipment.push(EquipmentEntry {
        asset_key: Some(9),
        asset_id: "DZ3".to_string(),
        description: "Dozer".to_string(),
        hrs_start: None,
        hrs_finish: None,
        total_hrs: None,
    });
    sub.report.personnel.push(PersonnelEntry {
        name: "Mio Kato".to_string(),
        time_start: None,
        time_finish: None,
        break_hrs: 0.0,
        total_hrs: None,
    });

    let report = build_daily_report(parse_ymd("2026-06-03"), &[sub]);
    assert_eq!(report.submissions[0].total_equipment_hrs, 8.5);
    assert_eq!(report.submissions[0].total_personnel_hrs, 9.0);
}

#[test]
fn test_equipment_summary_skips_blank_rows_and_prefers_asset_id() {
    let mut sub = stored(1, "12 - 03-06-26");
    sub.report.equipment.push(EquipmentEntry::default()); // blank placeholder
    sub.report.equipment.push(EquipmentEntry {
        asset_key: Some(3),
        asset_id: String::new(),
        description: "Water cart".to_string(),
        hrs_start: None,
        hrs_finish: None,
        total_hrs: None,
    });

    let report = build_daily_report(parse_ymd("2026-06-03"), &[sub]);
    assert_eq!(
        report.submissions[0].equipment_summary,
        vec!["EX17".to_string(), "Water cart".to_string()]
    );
}

#[test]
fn test_empty_day_has_zero_totals() {
    let report = build_daily_report(parse_ymd("2026-06-03"), &[]);
    assert!(report.submissions.is_empty());
    assert_eq!(report.totals.equipment_hrs, 0.0);
    assert_eq!(report.totals.personnel_hrs, 0.0);
}
