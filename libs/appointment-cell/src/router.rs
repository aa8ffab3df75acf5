use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::{handlers, AppointmentCellState};

/// All appointment operations require authentication.
pub fn appointment_routes(state: Arc<AppointmentCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_appointments))
        .route("/", post(handlers::create_appointment))
        .route("/upcoming", get(handlers::get_upcoming_appointments))
        .route("/past", get(handlers::get_past_appointments))
        .route("/{appointment_id}/cancel", put(handlers::cancel_appointment))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
