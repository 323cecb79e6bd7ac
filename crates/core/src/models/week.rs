use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{RosterError, RosterResult};
use crate::models::role::{Department, StaffRole};
use crate::models::shift::ShiftType;
use crate::models::staff::StaffMember;
use crate::payroll::PayrollSummary;

/// Longest range the grid will materialize, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Inclusive date window for a period view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> RosterResult<Self> {
        if end < start {
            return Err(RosterError::Validation(format!(
                "Range end {} is before start {}",
                end, start
            )));
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(RosterError::Validation(format!(
                "Range spans {} days, maximum is {}",
                days, MAX_RANGE_DAYS
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the window, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }
}

/// Contents of one (staff, date) cell. `None` means no row exists yet
/// for the cell ("absent").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub shift: Option<CellShift>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellShift {
    pub shift_type: ShiftType,
    pub bonus: i64,
    pub fine: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRow {
    pub staff: StaffMember,
    pub days: Vec<DayCell>,
    pub totals: PayrollSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGroup {
    pub role: StaffRole,
    pub staff: Vec<StaffRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentGrid {
    pub department: Department,
    pub roles: Vec<RoleGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekViewResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub departments: Vec<DepartmentGrid>,
}

/// Row shape handed to the spreadsheet writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: String,
    pub role: String,
    pub rate: i64,
    pub full_count: i64,
    pub half_count: i64,
    pub bonus: i64,
    pub fine: i64,
    pub total_pay: i64,
}
