//! Period grid construction.
//!
//! The aggregator is pure: it consumes roles, staff, and shift rows the
//! caller has already loaded for the window, plus an explicit [`Caller`]
//! capability, and produces the department → role → staff grid with a
//! payroll summary per row. No store access happens here, so a failed
//! store call can never leave a partially aggregated view behind.
//!
//! Row inclusion rule: a staff member appears under their role when they
//! are active OR they have at least one shift row inside the window.
//! The second arm is the "ghost inclusion" rule: an archived employee
//! stays visible, and payable, until the window moves past their last
//! recorded shift. This is intentional, not a leak of archived records.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::role::{Department, StaffRole};
use crate::models::shift::StaffShift;
use crate::models::staff::{Caller, StaffMember};
use crate::models::week::{
    CellShift, DateRange, DayCell, DepartmentGrid, ExportRow, RoleGroup, StaffRow,
    WeekViewResponse,
};
use crate::payroll;

/// Builds the period view for the given window.
///
/// A non-privileged caller receives the grid filtered down to the staff
/// record linked to their identity; a caller with no linked record sees
/// an empty grid. Shift rows outside the window are ignored even if the
/// caller loaded them.
pub fn build_week_view(
    range: &DateRange,
    roles: &[StaffRole],
    staff: &[StaffMember],
    shifts: &[StaffShift],
    caller: &Caller,
) -> WeekViewResponse {
    // Index the window's rows by cell and by employee.
    let mut cells: HashMap<(Uuid, NaiveDate), &StaffShift> = HashMap::new();
    let mut by_staff: HashMap<Uuid, Vec<&StaffShift>> = HashMap::new();
    for shift in shifts.iter().filter(|s| range.contains(s.date)) {
        cells.insert((shift.staff_id, shift.date), shift);
        by_staff.entry(shift.staff_id).or_default().push(shift);
    }

    let visible: Vec<&StaffMember> = staff
        .iter()
        .filter(|member| caller.is_privileged || caller.staff_id == Some(member.id))
        .collect();

    let days = range.days();

    let departments = Department::ALL
        .iter()
        .filter(|department| roles.iter().any(|role| role.department == **department))
        .map(|department| {
            let mut department_roles: Vec<&StaffRole> = roles
                .iter()
                .filter(|role| role.department == *department)
                .collect();
            department_roles.sort_by_key(|role| role.sort_order);

            let role_groups = department_roles
                .into_iter()
                .map(|role| {
                    let mut members: Vec<&StaffMember> = visible
                        .iter()
                        .copied()
                        .filter(|member| {
                            member.role_id == role.id
                                && (member.is_active || by_staff.contains_key(&member.id))
                        })
                        .collect();
                    members.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

                    let staff_rows = members
                        .into_iter()
                        .map(|member| build_staff_row(member, &days, &cells, &by_staff))
                        .collect();

                    RoleGroup {
                        role: role.clone(),
                        staff: staff_rows,
                    }
                })
                .collect();

            DepartmentGrid {
                department: *department,
                roles: role_groups,
            }
        })
        .collect();

    WeekViewResponse {
        start: range.start,
        end: range.end,
        departments,
    }
}

fn build_staff_row(
    member: &StaffMember,
    days: &[NaiveDate],
    cells: &HashMap<(Uuid, NaiveDate), &StaffShift>,
    by_staff: &HashMap<Uuid, Vec<&StaffShift>>,
) -> StaffRow {
    let day_cells = days
        .iter()
        .map(|date| DayCell {
            date: *date,
            shift: cells.get(&(member.id, *date)).map(|shift| CellShift {
                shift_type: shift.shift_type,
                bonus: shift.bonus,
                fine: shift.fine,
            }),
        })
        .collect();

    let own_shifts: Vec<StaffShift> = by_staff
        .get(&member.id)
        .map(|rows| rows.iter().map(|shift| (*shift).clone()).collect())
        .unwrap_or_default();

    StaffRow {
        staff: member.clone(),
        days: day_cells,
        totals: payroll::summarize(member.base_rate, &own_shifts),
    }
}

/// Flattens the period view into the row shape the spreadsheet writer
/// consumes, ordered by department, role order, then staff name.
pub fn build_export_rows(
    range: &DateRange,
    roles: &[StaffRole],
    staff: &[StaffMember],
    shifts: &[StaffShift],
) -> Vec<ExportRow> {
    let view = build_week_view(range, roles, staff, shifts, &Caller::privileged());

    view.departments
        .into_iter()
        .flat_map(|grid| grid.roles)
        .flat_map(|group| {
            let role_name = group.role.name;
            group
                .staff
                .into_iter()
                .map(move |row| ExportRow {
                    name: row.staff.name,
                    role: role_name.clone(),
                    rate: row.staff.base_rate,
                    full_count: row.totals.full_count,
                    half_count: row.totals.half_count,
                    bonus: row.totals.total_bonus,
                    fine: row.totals.total_fine,
                    total_pay: row.totals.total_pay,
                })
        })
        .collect()
}
