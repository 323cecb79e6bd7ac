//! # Period Grid Handlers
//!
//! Handlers for the period (week) view and the payroll export rows. Both
//! follow the same shape: load the window's roles, staff, and shift rows
//! from the store, then hand everything to the pure aggregator in
//! `shiftbook_core::week`. Nothing is cached between calls, so a failed
//! load can never leave stale totals behind.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use chrono::NaiveDate;
use shiftbook_core::{
    errors::RosterError,
    models::role::{Department, StaffRole},
    models::shift::StaffShift,
    models::staff::StaffMember,
    models::week::{DateRange, ExportRow, WeekViewResponse},
    week,
};

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Query parameters for the period view endpoint
#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// First day of the window (inclusive)
    pub start: NaiveDate,

    /// Last day of the window (inclusive)
    pub end: NaiveDate,

    /// Restrict the grid to one department
    pub department: Option<Department>,
}

/// Query parameters for the export endpoint
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Returns the period grid for the requested window.
///
/// A privileged caller sees every department, role, and staff row; a
/// caller resolved to a staff identity receives the same grid filtered
/// down to their own record.
#[axum::debug_handler]
pub async fn get_week_view(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekViewResponse>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;

    let range = DateRange::new(query.start, query.end)?;

    let (roles, staff, shifts) = load_window_records(&state, query.department, &range).await?;

    let view = week::build_week_view(&range, &roles, &staff, &shifts, &caller);

    Ok(Json(view))
}

/// Returns the flat payroll rows consumed by the spreadsheet writer.
#[axum::debug_handler]
pub async fn export_range(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Query(query): Query<ExportQuery>,
) -> Result<Json<Vec<ExportRow>>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    let range = DateRange::new(query.start, query.end)?;

    let (roles, staff, shifts) = load_window_records(&state, None, &range).await?;

    let rows = week::build_export_rows(&range, &roles, &staff, &shifts);

    Ok(Json(rows))
}

/// Loads everything the aggregator needs for one window.
async fn load_window_records(
    state: &ApiState,
    department: Option<Department>,
    range: &DateRange,
) -> Result<(Vec<StaffRole>, Vec<StaffMember>, Vec<StaffShift>), AppError> {
    let db_roles = match department {
        Some(department) => {
            shiftbook_db::repositories::role::list_roles_by_department(
                &state.db_pool,
                department.as_str(),
            )
            .await
        }
        None => shiftbook_db::repositories::role::list_roles(&state.db_pool).await,
    }
    .map_err(RosterError::Database)?;

    let roles = db_roles
        .into_iter()
        .map(|role| role.into_role())
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(RosterError::Database)?;

    let staff = shiftbook_db::repositories::staff::list_staff(&state.db_pool)
        .await
        .map_err(RosterError::Database)?
        .into_iter()
        .map(|member| member.into_staff())
        .collect();

    let shifts = shiftbook_db::repositories::shift::get_shifts_in_range(
        &state.db_pool,
        range.start,
        range.end,
    )
    .await
    .map_err(RosterError::Database)?
    .into_iter()
    .map(|shift| shift.into_shift())
    .collect::<eyre::Result<Vec<_>>>()
    .map_err(RosterError::Database)?;

    Ok((roles, staff, shifts))
}
