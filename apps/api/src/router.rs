use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::AppointmentCellState;
use auth_cell::router::auth_routes;
use auth_cell::AuthCellState;
use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorCellState;
use payment_cell::router::payment_routes;
use payment_cell::PaymentCellState;

pub struct AppCells {
    pub auth: Arc<AuthCellState>,
    pub doctors: Arc<DoctorCellState>,
    pub appointments: Arc<AppointmentCellState>,
    pub payments: Arc<PaymentCellState>,
}

pub fn create_router(cells: AppCells) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/auth", auth_routes(cells.auth))
        .nest("/doctors", doctor_routes(cells.doctors))
        .nest("/appointments", appointment_routes(cells.appointments))
        .nest("/payments", payment_routes(cells.payments))
}
