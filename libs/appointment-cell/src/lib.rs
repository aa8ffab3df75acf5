use std::sync::Arc;

use shared_config::AppConfig;

use crate::services::lifecycle::AppointmentLifecycleService;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

/// Shared state for the appointment cell's routes.
pub struct AppointmentCellState {
    pub config: Arc<AppConfig>,
    pub service: AppointmentLifecycleService,
}
