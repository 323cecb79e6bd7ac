use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/week", get(handlers::week::get_week_view))
        .route("/api/export", get(handlers::week::export_range))
}
