//! # Caller Resolution Module
//!
//! Resolves the HTTP caller into an explicit [`Caller`] capability value
//! before any handler logic runs. The engine itself never consults
//! ambient session state: a handler passes the resolved capability into
//! `shiftbook-core`, and mutating handlers gate on [`require_privileged`]
//! before touching the store.
//!
//! Two kinds of credential are accepted in the `Authorization: Bearer`
//! header:
//!
//! - the configured admin token, which grants the privileged capability;
//! - an account id linked to a staff record (`staff.account_id`), which
//!   grants a read-only view scoped to that record.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use shiftbook_core::errors::RosterError;
use shiftbook_core::models::staff::Caller;

use crate::ApiState;

/// Extracts the bearer token from the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the request's capability.
///
/// With no admin token configured every caller is privileged; token
/// checks are assumed to happen upstream or to be disabled for local
/// development.
pub async fn resolve_caller(state: &ApiState, headers: &HeaderMap) -> Result<Caller, RosterError> {
    let Some(admin_token) = state.admin_token.as_deref() else {
        return Ok(Caller::privileged());
    };

    let token = bearer_token(headers)
        .ok_or_else(|| RosterError::Forbidden("Missing bearer token".to_string()))?;

    if token == admin_token {
        return Ok(Caller::privileged());
    }

    // Any other token is treated as an account id; a match grants the
    // self-view capability for the linked staff record.
    let member = shiftbook_db::repositories::staff::get_staff_by_account_id(&state.db_pool, token)
        .await
        .map_err(RosterError::Database)?
        .ok_or_else(|| RosterError::Forbidden("Unrecognized credentials".to_string()))?;

    Ok(Caller::staff(member.id))
}

/// Rejects non-privileged callers before a mutation is attempted, so a
/// denied request never partially applies.
pub fn require_privileged(caller: &Caller) -> Result<(), RosterError> {
    if caller.is_privileged {
        Ok(())
    } else {
        Err(RosterError::Forbidden(
            "This operation requires the privileged capability".to_string(),
        ))
    }
}
