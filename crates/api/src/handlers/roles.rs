//! # Role Handlers
//!
//! Role management: creation, renaming, listing, and the drag-reorder
//! reconciliation. Reordering is planned by the pure
//! `shiftbook_core::ordering` module and only the computed differences
//! are written back, so repeating a move is a no-op.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use shiftbook_core::{
    errors::RosterError,
    models::role::{
        CreateRoleRequest, ReorderRolesRequest, ReorderRolesResponse, StaffRole,
        UpdateRoleRequest,
    },
    ordering,
};
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_role(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoleRequest>,
) -> Result<Json<StaffRole>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    if payload.name.trim().is_empty() {
        return Err(AppError(RosterError::Validation(
            "Role name must not be empty".to_string(),
        )));
    }

    let role = shiftbook_db::repositories::role::create_role(
        &state.db_pool,
        payload.department.as_str(),
        payload.name.trim(),
    )
    .await
    .map_err(RosterError::Database)?
    .into_role()
    .map_err(RosterError::Database)?;

    Ok(Json(role))
}

#[axum::debug_handler]
pub async fn list_roles(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StaffRole>>, AppError> {
    auth::resolve_caller(&state, &headers).await?;

    let roles = shiftbook_db::repositories::role::list_roles(&state.db_pool)
        .await
        .map_err(RosterError::Database)?
        .into_iter()
        .map(|role| role.into_role())
        .collect::<eyre::Result<Vec<_>>>()
        .map_err(RosterError::Database)?;

    Ok(Json(roles))
}

#[axum::debug_handler]
pub async fn update_role(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<StaffRole>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(AppError(RosterError::Validation(
                "Role name must not be empty".to_string(),
            )));
        }
    }

    let role = shiftbook_db::repositories::role::update_role(
        &state.db_pool,
        id,
        payload.name.as_deref().map(str::trim),
    )
    .await
    .map_err(RosterError::Database)?
    .ok_or_else(|| RosterError::NotFound(format!("Role with ID {} not found", id)))?
    .into_role()
    .map_err(RosterError::Database)?;

    Ok(Json(role))
}

/// Applies a reorder gesture within one department.
///
/// The department's current role list is loaded, the pure planner
/// computes the minimal set of sort-order writes, and each write is
/// persisted. Returns the persisted changes; an empty list means the
/// move was already in effect.
#[axum::debug_handler]
pub async fn reorder_roles(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<ReorderRolesRequest>,
) -> Result<Json<ReorderRolesResponse>, AppError> {
    let caller = auth::resolve_caller(&state, &headers).await?;
    auth::require_privileged(&caller)?;

    let roles = shiftbook_db::repositories::role::list_roles_by_department(
        &state.db_pool,
        payload.department.as_str(),
    )
    .await
    .map_err(RosterError::Database)?
    .into_iter()
    .map(|role| role.into_role())
    .collect::<eyre::Result<Vec<_>>>()
    .map_err(RosterError::Database)?;

    let changes = ordering::plan_reorder(&roles, payload.moved_role_id, payload.new_index)?;

    for change in &changes {
        shiftbook_db::repositories::role::update_sort_order(
            &state.db_pool,
            change.role_id,
            change.sort_order,
        )
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| {
            RosterError::NotFound(format!("Role with ID {} not found", change.role_id))
        })?;
    }

    Ok(Json(ReorderRolesResponse { changes }))
}
