use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, PaymentCellState};

/// Payment routes are reachable without a token: the QR path is opened from
/// a phone that never saw the patient's session. The records are simulation
/// only.
pub fn payment_routes(state: Arc<PaymentCellState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_payment))
        .route("/confirm/{payment_id}", post(handlers::confirm_payment))
        .route("/cancel/{payment_id}", post(handlers::cancel_payment))
        .route("/{payment_id}", get(handlers::get_payment))
        .route("/{payment_id}", put(handlers::update_payment_status))
        .with_state(state)
}
