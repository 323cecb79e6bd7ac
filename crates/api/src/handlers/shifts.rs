//! # Shift Cell Handlers
//!
//! Handlers for the two mutations on a (staff, date) cell: cycling its
//! attendance state and recording bonus/fine amounts.
//!
//! ## Toggle concurrency protocol
//!
//! Two privileged actors may toggle the same absent cell at once. The
//! store's unique constraint decides the winner: the insert uses
//! `ON CONFLICT DO NOTHING`, so exactly one row is created and the
//! losing caller gets no row back. The loser then re-reads the cell and
//! reports whatever state it finds. It must NOT re-run the state
//! machine, or the cycle would advance twice for one physical action.
//! The conflict is never surfaced to the user.

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use eyre::eyre;
use shiftbook_core::{
    cycle,
    errors::RosterError,
    models::shift::{
        SetCellFinanceRequest, ShiftType, StaffShift, ToggleCellRequest, ToggleCellResponse,
    },
};

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Advances a cell to its next attendance state.
///
/// An absent cell gains a `full` row; an existing row cycles
/// `full → half → none → full` in place.
#[axum::debug_handler]
pub async fn toggle_cell(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<ToggleCellRequest>,
) -> Result<Json<ToggleCellResponse>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    // Reject unknown staff before any write; a dangling cell write would
    // otherwise surface as an opaque foreign-key error.
    shiftbook_db::repositories::staff::get_staff_by_id(&state.db_pool, payload.staff_id)
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            RosterError::NotFound(format!("Staff member {} not found", payload.staff_id))
        })?;

    let current = shiftbook_db::repositories::shift::get_shift_by_cell(
        &state.db_pool,
        payload.staff_id,
        payload.date,
    )
    .await
    .map_err(RosterError::Database)?;

    let shift_type = match current {
        None => {
            let next = cycle::next_shift_type(None);
            let created = shiftbook_db::repositories::shift::create_shift(
                &state.db_pool,
                payload.staff_id,
                payload.date,
                next.as_str(),
                0,
                0,
            )
            .await
            .map_err(RosterError::Database)?;

            match created {
                Some(row) => parse_shift_type(&row.shift_type)?,
                // Lost the create race: someone else made the row first.
                // Re-read and report its state as-is.
                None => {
                    let row = reread_cell(&state, payload.staff_id, payload.date).await?;
                    parse_shift_type(&row.shift_type)?
                }
            }
        }
        Some(row) => {
            let current_type = parse_shift_type(&row.shift_type)?;
            let next = cycle::next_shift_type(Some(current_type));

            let updated = shiftbook_db::repositories::shift::update_shift(
                &state.db_pool,
                row.id,
                Some(next.as_str()),
                None,
                None,
            )
            .await
            .map_err(RosterError::Database)?
            .ok_or_else(|| {
                RosterError::NotFound(format!(
                    "Shift row for staff {} on {} no longer exists",
                    payload.staff_id, payload.date
                ))
            })?;

            parse_shift_type(&updated.shift_type)?
        }
    };

    Ok(Json(ToggleCellResponse {
        staff_id: payload.staff_id,
        date: payload.date,
        shift_type,
    }))
}

/// Records bonus and fine amounts against a cell.
///
/// An absent cell gains a `none` row first; disciplinary entries do not
/// require attendance.
#[axum::debug_handler]
pub async fn set_cell_finance(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<SetCellFinanceRequest>,
) -> Result<Json<StaffShift>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    if payload.bonus < 0 {
        return Err(AppError(RosterError::Validation(
            "Bonus must not be negative".to_string(),
        )));
    }
    if payload.fine < 0 {
        return Err(AppError(RosterError::Validation(
            "Fine must not be negative".to_string(),
        )));
    }

    shiftbook_db::repositories::staff::get_staff_by_id(&state.db_pool, payload.staff_id)
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            RosterError::NotFound(format!("Staff member {} not found", payload.staff_id))
        })?;

    let current = shiftbook_db::repositories::shift::get_shift_by_cell(
        &state.db_pool,
        payload.staff_id,
        payload.date,
    )
    .await
    .map_err(RosterError::Database)?;

    let row = match current {
        Some(row) => update_finance(&state, row.id, &payload).await?,
        None => {
            let created = shiftbook_db::repositories::shift::create_shift(
                &state.db_pool,
                payload.staff_id,
                payload.date,
                ShiftType::None.as_str(),
                payload.bonus,
                payload.fine,
            )
            .await
            .map_err(RosterError::Database)?;

            match created {
                Some(row) => row,
                // Lost the create race; apply the amounts to the row the
                // winner made (per-field last-write-wins).
                None => {
                    let row = reread_cell(&state, payload.staff_id, payload.date).await?;
                    update_finance(&state, row.id, &payload).await?
                }
            }
        }
    };

    let shift = row.into_shift().map_err(RosterError::Database)?;

    Ok(Json(shift))
}

async fn update_finance(
    state: &ApiState,
    shift_id: uuid::Uuid,
    payload: &SetCellFinanceRequest,
) -> Result<shiftbook_db::models::DbStaffShift, AppError> {
    let updated = shiftbook_db::repositories::shift::update_shift(
        &state.db_pool,
        shift_id,
        None,
        Some(payload.bonus),
        Some(payload.fine),
    )
    .await
    .map_err(RosterError::Database)?
    .ok_or_else(|| {
        RosterError::NotFound(format!(
            "Shift row for staff {} on {} no longer exists",
            payload.staff_id, payload.date
        ))
    })?;

    Ok(updated)
}

/// Re-reads a cell after a lost create race. The winner's row must be
/// there; an empty read at this point means the store broke its own
/// uniqueness contract.
async fn reread_cell(
    state: &ApiState,
    staff_id: uuid::Uuid,
    date: chrono::NaiveDate,
) -> Result<shiftbook_db::models::DbStaffShift, AppError> {
    shiftbook_db::repositories::shift::get_shift_by_cell(&state.db_pool, staff_id, date)
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            AppError(RosterError::Database(eyre!(
                "Shift row for staff {} on {} vanished after a conflicting create",
                staff_id,
                date
            )))
        })
}

fn parse_shift_type(raw: &str) -> Result<ShiftType, AppError> {
    raw.parse::<ShiftType>()
        .map_err(|e| AppError(RosterError::Database(eyre!("{}", e))))
}
