//! Role display-order reconciliation.
//!
//! After a drag-reorder gesture the department's roles are re-walked
//! and each one is assigned its new 1-based positional index. Only
//! roles whose stored `sort_order` differs from the computed index are
//! reported back, so applying the plan is an idempotent minimal-diff
//! write: replaying the same move produces an empty plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{RosterError, RosterResult};
use crate::models::role::StaffRole;

/// One role whose persisted `sort_order` must change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrderChange {
    pub role_id: Uuid,
    pub sort_order: i32,
}

/// Computes the sort-order writes needed after moving one role to a new
/// 0-based position within its department's list.
///
/// The input is the department's full role list in any order; it is
/// sorted by the currently stored `sort_order` first. The moved role is
/// spliced out and reinserted at `new_index`, then the list is walked
/// assigning `index + 1` to each entry. A single invocation always
/// yields a contiguous `1..=N` assignment with no duplicates, even when
/// the stored orders had gaps.
pub fn plan_reorder(
    roles: &[StaffRole],
    moved_role_id: Uuid,
    new_index: usize,
) -> RosterResult<Vec<SortOrderChange>> {
    if new_index >= roles.len() {
        return Err(RosterError::Validation(format!(
            "Reorder index {} is out of bounds for {} roles",
            new_index,
            roles.len()
        )));
    }

    let mut ordered: Vec<&StaffRole> = roles.iter().collect();
    ordered.sort_by_key(|role| role.sort_order);

    let current_index = ordered
        .iter()
        .position(|role| role.id == moved_role_id)
        .ok_or_else(|| {
            RosterError::NotFound(format!("Role {} not found in department list", moved_role_id))
        })?;

    // Plain list splice; ties in the drop position need no special-casing.
    let moved = ordered.remove(current_index);
    ordered.insert(new_index, moved);

    let changes = ordered
        .iter()
        .enumerate()
        .filter_map(|(index, role)| {
            let sort_order = (index + 1) as i32;
            (role.sort_order != sort_order).then_some(SortOrderChange {
                role_id: role.id,
                sort_order,
            })
        })
        .collect();

    Ok(changes)
}
