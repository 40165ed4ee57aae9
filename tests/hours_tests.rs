use shiftdocket::core::docket;
use shiftdocket::core::hours::{equipment_total, personnel_total};

mod common;
use common::{parse_hm, parse_ymd};

#[test]
fn test_personnel_day_shift_with_break() {
    // 08:00 -> 17:30 with a 0.5h break
    let total = personnel_total(parse_hm("08:00"), parse_hm("17:30"), 0.5);
    assert_eq!(total, Some(9.0));
}

#[test]
fn test_personnel_overnight_wraps_forward() {
    // 22:00 -> 06:00 crosses midnight
    let total = personnel_total(parse_hm("22:00"), parse_hm("06:00"), 0.0);
    assert_eq!(total, Some(8.0));
}

#[test]
fn test_personnel_overnight_with_break() {
    let total = personnel_total(parse_hm("18:00"), parse_hm("06:00"), 1.0);
    assert_eq!(total, Some(11.0));
}

#[test]
fn test_personnel_zero_length_shift() {
    let total = personnel_total(parse_hm("08:00"), parse_hm("08:00"), 0.0);
    assert_eq!(total, Some(0.0));
}

#[test]
fn test_personnel_break_exceeding_worked_time_is_unset() {
    // 1 hour worked, 2 hour break: no sensible total
    let total = personnel_total(parse_hm("08:00"), parse_hm("09:00"), 2.0);
    assert_eq!(total, None);
}

#[test]
fn test_personnel_rounds_to_two_decimals() {
    // 08:00 -> 16:20 is 8h20m = 8.333... hours
    let total = personnel_total(parse_hm("08:00"), parse_hm("16:20"), 0.0);
    assert_eq!(total, Some(8.33));
}

#[test]
fn test_equipment_meter_difference() {
    assert_eq!(equipment_total(120.0, 128.5), Some(8.5));
}

#[test]
fn test_equipment_zero_usage() {
    assert_eq!(equipment_total(450.0, 450.0), Some(0.0));
}

#[test]
fn test_equipment_finish_before_start_is_unset() {
    // meters do not run backwards; treat as entry error
    assert_eq!(equipment_total(128.5, 120.0), None);
}

#[test]
fn test_equipment_rounds_to_one_decimal() {
    assert_eq!(equipment_total(100.0, 108.25), Some(8.3));
    assert_eq!(equipment_total(100.0, 108.24), Some(8.2));
}

#[test]
fn test_docket_format() {
    let d = docket::generate(12, parse_ymd("2026-06-03"));
    assert_eq!(d, "12 - 03-06-26");
}

#[test]
fn test_docket_zero_pads_day_and_month() {
    let d = docket::generate(4, parse_ymd("2026-01-09"));
    assert_eq!(d, "4 - 09-01-26");
}

#[test]
fn test_docket_opkey_roundtrip() {
    let d = docket::generate(27, parse_ymd("2026-11-20"));
    assert_eq!(docket::opkey_of(&d), Some(27));
}
