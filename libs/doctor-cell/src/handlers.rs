use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::DoctorCellState;

pub async fn list_doctors(
    State(state): State<Arc<DoctorCellState>>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.directory.list().await;
    Ok(Json(json!({ "doctors": doctors })))
}

pub async fn get_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .get(doctor_id)
        .await
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!({ "doctor": doctor })))
}

pub async fn list_specialties(
    State(state): State<Arc<DoctorCellState>>,
) -> Result<Json<Value>, AppError> {
    let specialties = state.directory.specialties().await;
    Ok(Json(json!({ "specialties": specialties })))
}
