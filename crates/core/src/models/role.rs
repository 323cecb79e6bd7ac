use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RosterError;

/// Display grouping for roles. Purely a partition of the grid, not a
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Hall,
    Kitchen,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Hall, Department::Kitchen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hall => "hall",
            Department::Kitchen => "kitchen",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hall" => Ok(Department::Hall),
            "kitchen" => Ok(Department::Kitchen),
            other => Err(RosterError::Validation(format!(
                "Unknown department: {}",
                other
            ))),
        }
    }
}

/// A role within one department. `sort_order` is a 1-based display
/// position, unique within the department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRole {
    pub id: Uuid,
    pub department: Department,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub department: Department,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
}

/// Result of a drag-reorder gesture: the moved role and the 0-based
/// index it was dropped at within its department's list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRolesRequest {
    pub department: Department,
    pub moved_role_id: Uuid,
    pub new_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRolesResponse {
    pub changes: Vec<crate::ordering::SortOrderChange>,
}
