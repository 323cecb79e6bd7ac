//! # Staff Handlers
//!
//! Staff record management. Staff are archived, never hard-deleted:
//! setting `is_active` to false via the update endpoint keeps their
//! shift history attributable, and the grid's ghost-inclusion rule keeps
//! them visible while the window still covers their recorded shifts.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use shiftbook_core::{
    errors::RosterError,
    models::staff::{CreateStaffRequest, StaffMember, UpdateStaffRequest},
};
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_staff(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateStaffRequest>,
) -> Result<Json<StaffMember>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    if payload.name.trim().is_empty() {
        return Err(AppError(RosterError::Validation(
            "Staff name must not be empty".to_string(),
        )));
    }
    if payload.base_rate < 0 {
        return Err(AppError(RosterError::Validation(
            "Base rate must not be negative".to_string(),
        )));
    }

    // The role must exist; a dangling role_id would only fail later as an
    // opaque foreign-key error.
    shiftbook_db::repositories::role::get_role_by_id(&state.db_pool, payload.role_id)
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            RosterError::NotFound(format!("Role with ID {} not found", payload.role_id))
        })?;

    let member = shiftbook_db::repositories::staff::create_staff(
        &state.db_pool,
        payload.name.trim(),
        payload.phone.as_deref(),
        payload.email.as_deref(),
        payload.role_id,
        payload.base_rate,
        payload.account_id.as_deref(),
    )
    .await
    .map_err(RosterError::Database)?
    .into_staff();

    Ok(Json(member))
}

#[axum::debug_handler]
pub async fn list_staff(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StaffMember>>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    let members = shiftbook_db::repositories::staff::list_staff(&state.db_pool)
        .await
        .map_err(RosterError::Database)?
        .into_iter()
        .map(|member| member.into_staff())
        .collect();

    Ok(Json(members))
}

#[axum::debug_handler]
pub async fn update_staff(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStaffRequest>,
) -> Result<Json<StaffMember>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError(RosterError::Validation(
                "Staff name must not be empty".to_string(),
            )));
        }
    }
    if let Some(base_rate) = payload.base_rate {
        if base_rate < 0 {
            return Err(AppError(RosterError::Validation(
                "Base rate must not be negative".to_string(),
            )));
        }
    }

    if let Some(role_id) = payload.role_id {
        shiftbook_db::repositories::role::get_role_by_id(&state.db_pool, role_id)
            .await
            .map_err(RosterError::Database)?
            .ok_or_else(|| {
                RosterError::NotFound(format!("Role with ID {} not found", role_id))
            })?;
    }

    let member = shiftbook_db::repositories::staff::update_staff(
        &state.db_pool,
        id,
        payload.name.as_deref().map(str::trim),
        payload.phone.as_deref(),
        payload.email.as_deref(),
        payload.role_id,
        payload.base_rate,
        payload.is_active,
        payload.account_id.as_deref(),
    )
    .await
    .map_err(RosterError::Database)?
    .ok_or_else(|| RosterError::NotFound(format!("Staff member with ID {} not found", id)))?
    .into_staff();

    Ok(Json(member))
}
