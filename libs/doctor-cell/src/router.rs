use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers, DoctorCellState};

/// Doctor directory is browseable without authentication.
pub fn doctor_routes(state: Arc<DoctorCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/specialties/all", get(handlers::list_specialties))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
