use std::sync::Arc;

use crate::services::payment::PaymentService;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

/// Shared state for the payment cell's routes.
pub struct PaymentCellState {
    pub service: PaymentService,
}
