use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RosterError;

/// Attendance recorded against one (staff, date) cell. `None` is a
/// real row ("did not come") and may still carry a bonus or fine; a
/// cell with no row at all is a different state ("absent").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Full,
    Half,
    None,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Full => "full",
            ShiftType::Half => "half",
            ShiftType::None => "none",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ShiftType::Full),
            "half" => Ok(ShiftType::Half),
            "none" => Ok(ShiftType::None),
            other => Err(RosterError::Validation(format!(
                "Unknown shift type: {}",
                other
            ))),
        }
    }
}

/// One persisted shift cell. Identity is conceptually (staff_id, date);
/// the surrogate id exists for storage convenience only and the pair is
/// unique in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffShift {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub bonus: i64,
    pub fine: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCellRequest {
    pub staff_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCellResponse {
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCellFinanceRequest {
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub bonus: i64,
    pub fine: i64,
}
