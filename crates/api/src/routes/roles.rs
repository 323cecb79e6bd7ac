use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/roles", post(handlers::roles::create_role))
        .route("/api/roles", get(handlers::roles::list_roles))
        .route("/api/roles/:id", put(handlers::roles::update_role))
        .route("/api/roles/reorder", post(handlers::roles::reorder_roles))
}
