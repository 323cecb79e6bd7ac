use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/staff", post(handlers::staff::create_staff))
        .route("/api/staff", get(handlers::staff::list_staff))
        .route("/api/staff/:id", put(handlers::staff::update_staff))
}
