//! Per-employee payroll aggregation.
//!
//! All amounts are whole currency units in `i64`. A half shift pays
//! `base_rate / 2` with the division applied after the multiply, so an
//! odd rate truncates at most once per summary. Total pay is signed and
//! deliberately not floored at zero: a large fine can drive a row
//! negative and the callers pass that through.

use serde::{Deserialize, Serialize};

use crate::models::shift::{ShiftType, StaffShift};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub full_count: i64,
    pub half_count: i64,
    pub total_bonus: i64,
    pub total_fine: i64,
    pub total_pay: i64,
}

/// Folds an employee's shift rows into worked-unit counts and total pay.
///
/// `none` rows contribute nothing to the counts but their bonus and
/// fine still accumulate; a disciplinary entry does not require
/// attendance.
pub fn summarize(base_rate: i64, shifts: &[StaffShift]) -> PayrollSummary {
    let mut summary = PayrollSummary::default();

    for shift in shifts {
        match shift.shift_type {
            ShiftType::Full => summary.full_count += 1,
            ShiftType::Half => summary.half_count += 1,
            ShiftType::None => {}
        }
        summary.total_bonus += shift.bonus;
        summary.total_fine += shift.fine;
    }

    summary.total_pay = summary.full_count * base_rate
        + summary.half_count * base_rate / 2
        + summary.total_bonus
        - summary.total_fine;

    summary
}
