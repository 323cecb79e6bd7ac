use chrono::{DateTime, NaiveDate, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use shiftbook_core::models::role::{Department, StaffRole};
use shiftbook_core::models::shift::{ShiftType, StaffShift};
use shiftbook_core::models::staff::StaffMember;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStaffRole {
    pub id: Uuid,
    pub department: String,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStaffMember {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_id: Uuid,
    pub base_rate: i64,
    pub is_active: bool,
    pub account_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStaffShift {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub shift_date: NaiveDate,
    pub shift_type: String,
    pub bonus: i64,
    pub fine: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbStaffRole {
    /// Parses the stored department tag into the domain model.
    pub fn into_role(self) -> Result<StaffRole> {
        let department: Department = self
            .department
            .parse()
            .map_err(|e| eyre!("Corrupt role row {}: {}", self.id, e))?;

        Ok(StaffRole {
            id: self.id,
            department,
            name: self.name,
            sort_order: self.sort_order,
            created_at: self.created_at,
        })
    }
}

impl DbStaffMember {
    pub fn into_staff(self) -> StaffMember {
        StaffMember {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            role_id: self.role_id,
            base_rate: self.base_rate,
            is_active: self.is_active,
            account_id: self.account_id,
            created_at: self.created_at,
        }
    }
}

impl DbStaffShift {
    /// Parses the stored shift-type tag into the domain model.
    pub fn into_shift(self) -> Result<StaffShift> {
        let shift_type: ShiftType = self
            .shift_type
            .parse()
            .map_err(|e| eyre!("Corrupt shift row {}: {}", self.id, e))?;

        Ok(StaffShift {
            id: self.id,
            staff_id: self.staff_id,
            date: self.shift_date,
            shift_type,
            bonus: self.bonus,
            fine: self.fine,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
