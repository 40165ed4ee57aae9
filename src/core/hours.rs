//! Shift-hours arithmetic. Both functions are pure and must be rerun on
//! every input change so displayed totals never go stale.

use crate::utils::time::{minutes_of_day, round1, round2};
use chrono::NaiveTime;

/// Equipment total = finish − start, one decimal.
/// A negative interval is an invalid reading: the total stays unset
/// rather than being clamped to zero. A zero-length interval is a valid
/// total of 0.0.
pub fn equipment_total(start: f64, finish: f64) -> Option<f64> {
    let total = finish - start;
    if total >= 0.0 { Some(round1(total)) } else { None }
}

/// Personnel total in hours, two decimals.
/// Times are wall-clock; a finish earlier than the start is taken as an
/// overnight shift and gets one day added (a single midnight crossing is
/// the most a shift can span). A break longer than the worked interval
/// leaves the total unset.
pub fn personnel_total(start: NaiveTime, finish: NaiveTime, break_hrs: f64) -> Option<f64> {
    let start_min = minutes_of_day(start);
    let mut finish_min = minutes_of_day(finish);

    if finish_min < start_min {
        finish_min += 24 * 60;
    }

    let worked_min = (finish_min - start_min) as f64 - break_hrs * 60.0;
    let hours = worked_min / 60.0;

    if hours >= 0.0 { Some(round2(hours)) } else { None }
}
