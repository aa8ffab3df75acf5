use std::sync::Arc;

use crate::directory::DoctorDirectory;

pub mod directory;
pub mod handlers;
pub mod models;
pub mod router;

/// Shared state for the doctor cell's routes.
pub struct DoctorCellState {
    pub directory: Arc<dyn DoctorDirectory>,
}
