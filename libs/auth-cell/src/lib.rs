use std::sync::Arc;

use appointment_cell::store::AppointmentStore;
use doctor_cell::directory::DoctorDirectory;
use shared_config::AppConfig;

use crate::store::UserStore;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

/// Shared state for the auth cell's routes. The admin surface reaches into
/// the appointment store and doctor directory, so those seams are injected
/// here alongside the user store.
pub struct AuthCellState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub appointments: Arc<dyn AppointmentStore>,
    pub doctors: Arc<dyn DoctorDirectory>,
}
