use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{CreatePaymentRequest, PaymentError, UpdatePaymentStatusRequest};
use crate::PaymentCellState;

fn map_error(e: PaymentError) -> AppError {
    match e {
        PaymentError::NotFound => AppError::NotFound("Payment not found".to_string()),
        PaymentError::DuplicateId => AppError::BadRequest("Payment already exists".to_string()),
        PaymentError::DatabaseError(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn create_payment(
    State(state): State<Arc<PaymentCellState>>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let payment = state.service.create(request).await.map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Payment created successfully",
            "payment": payment
        })),
    ))
}

#[axum::debug_handler]
pub async fn get_payment(
    State(state): State<Arc<PaymentCellState>>,
    Path(payment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let payment = state.service.get(&payment_id).await.map_err(map_error)?;
    Ok(Json(json!(payment)))
}

#[axum::debug_handler]
pub async fn update_payment_status(
    State(state): State<Arc<PaymentCellState>>,
    Path(payment_id): Path<String>,
    Json(request): Json<UpdatePaymentStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let payment = state
        .service
        .update_status(&payment_id, request.status)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "message": format!("Payment {} successfully", payment.status),
        "payment": payment
    })))
}

#[axum::debug_handler]
pub async fn confirm_payment(
    State(state): State<Arc<PaymentCellState>>,
    Path(payment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let payment = state.service.confirm(&payment_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "message": "Payment confirmed successfully",
        "payment": payment
    })))
}

#[axum::debug_handler]
pub async fn cancel_payment(
    State(state): State<Arc<PaymentCellState>>,
    Path(payment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let payment = state.service.cancel(&payment_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "message": "Payment cancelled successfully",
        "payment": payment
    })))
}
