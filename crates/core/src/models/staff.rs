use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_id: Uuid,
    /// Pay for one full shift, in whole currency units.
    pub base_rate: i64,
    /// Archive flag. Archived staff keep their shift history.
    pub is_active: bool,
    /// Linkage to an authentication identity, for self-service visibility.
    pub account_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_id: Uuid,
    pub base_rate: i64,
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStaffRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<Uuid>,
    pub base_rate: Option<i64>,
    pub is_active: Option<bool>,
    pub account_id: Option<String>,
}

/// Resolved capability of the caller of a read or mutation. Built by
/// the API layer and passed in explicitly; the engine never consults
/// ambient session state.
#[derive(Debug, Clone)]
pub struct Caller {
    pub is_privileged: bool,
    /// The staff record linked to the caller's identity, if any.
    pub staff_id: Option<Uuid>,
}

impl Caller {
    pub fn privileged() -> Self {
        Self {
            is_privileged: true,
            staff_id: None,
        }
    }

    pub fn staff(staff_id: Uuid) -> Self {
        Self {
            is_privileged: false,
            staff_id: Some(staff_id),
        }
    }
}
