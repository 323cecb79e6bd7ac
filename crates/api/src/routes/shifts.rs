use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/shifts/toggle", post(handlers::shifts::toggle_cell))
        .route("/api/shifts/finance", post(handlers::shifts::set_cell_finance))
}
