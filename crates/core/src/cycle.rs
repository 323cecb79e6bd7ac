//! The shift cell state machine.
//!
//! A cell cycles `full → half → none → full` on each interaction; a
//! cell with no record yet enters the cycle at `full`. The function is
//! total and pure. The side effects belong to the caller: on the
//! absent → full transition the caller creates the record, and if that
//! create loses a race to a concurrent one it must re-read the current
//! state instead of surfacing an error (see the toggle handler).

use crate::models::shift::ShiftType;

/// Next state for a cell given its current one. `None` means no record
/// exists for the cell yet.
pub fn next_shift_type(current: Option<ShiftType>) -> ShiftType {
    match current {
        None => ShiftType::Full,
        Some(ShiftType::Full) => ShiftType::Half,
        Some(ShiftType::Half) => ShiftType::None,
        Some(ShiftType::None) => ShiftType::Full,
    }
}
