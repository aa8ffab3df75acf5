use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::AppointmentCellState;

fn map_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn get_appointments(
    State(state): State<Arc<AppointmentCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let appointments = state
        .service
        .list_all_for_patient(user.id)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({ "appointments": appointments })))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment = state
        .service
        .create(user.id, request)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created successfully",
            "appointment": appointment
        })),
    ))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .service
        .cancel(user.id, appointment_id)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "message": "Appointment cancelled successfully",
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn get_upcoming_appointments(
    State(state): State<Arc<AppointmentCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let today = Utc::now().date_naive();
    let appointments = state
        .service
        .list_upcoming(user.id, today)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({ "appointments": appointments })))
}

#[axum::debug_handler]
pub async fn get_past_appointments(
    State(state): State<Arc<AppointmentCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let today = Utc::now().date_naive();
    let appointments = state
        .service
        .list_past(user.id, today)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({ "appointments": appointments })))
}
