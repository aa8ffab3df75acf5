use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

use appointment_cell::models::AppointmentStatus;
use doctor_cell::models::CreateDoctorRequest;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_utils::jwt::sign_token;

use crate::models::{LoginRequest, SignupRequest, UserAccount, UserRole};
use crate::services::password::{hash_password, verify_password};
use crate::AuthCellState;

#[axum::debug_handler]
pub async fn signup(
    State(state): State<Arc<AuthCellState>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if state.users.find_by_email(&request.email).await.is_some() {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    let password_hash =
        hash_password(&request.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let account = UserAccount {
        id: Uuid::new_v4(),
        email: request.email,
        password_hash,
        full_name: request.full_name,
        phone: request.phone,
        role: UserRole::User,
        created_at: Utc::now(),
    };

    let account = state
        .users
        .insert(account)
        .await
        .map_err(|_| AppError::BadRequest("User already exists".to_string()))?;

    let token =
        sign_token(account.id, &state.config.jwt_secret).map_err(AppError::Internal)?;

    info!("User {} signed up", account.id);
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "token": token,
            "user": account.to_response()
        })),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AuthCellState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let account = state
        .users
        .find_by_email(&request.email)
        .await
        .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

    let valid = verify_password(&request.password, &account.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    let token =
        sign_token(account.id, &state.config.jwt_secret).map_err(AppError::Internal)?;

    debug!("User {} logged in", account.id);
    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": account.to_response()
    })))
}

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let account = state
        .users
        .find_by_id(user.id)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({ "user": account.to_response() })))
}

/// Admin routes are gated on the caller's stored role, not anything in the
/// token: the token only carries the user id.
async fn require_admin(state: &AuthCellState, caller: &AuthUser) -> Result<UserAccount, AppError> {
    let account = state
        .users
        .find_by_id(caller.id)
        .await
        .ok_or_else(|| AppError::Auth("Admin access required".to_string()))?;

    if account.role != UserRole::Admin {
        return Err(AppError::Auth("Admin access required".to_string()));
    }

    Ok(account)
}

#[axum::debug_handler]
pub async fn get_all_users(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_admin(&state, &user).await?;

    let users: Vec<_> = state
        .users
        .list_all()
        .await
        .iter()
        .map(UserAccount::to_response)
        .collect();

    Ok(Json(json!({ "users": users })))
}

#[axum::debug_handler]
pub async fn get_all_appointments(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_admin(&state, &user).await?;

    let appointments = state
        .appointments
        .list_all()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Join each appointment with its patient's name and email.
    let mut enriched = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        let patient = state.users.find_by_id(appointment.patient_id).await;
        let mut value = json!(appointment);
        value["patient_name"] = match &patient {
            Some(p) => json!(p.full_name),
            None => json!("Unknown"),
        };
        value["patient_email"] = match &patient {
            Some(p) => json!(p.email),
            None => json!("Unknown"),
        };
        enriched.push(value);
    }

    Ok(Json(json!({ "appointments": enriched })))
}

#[axum::debug_handler]
pub async fn add_doctor(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    require_admin(&state, &user).await?;

    let doctor = state.doctors.add(request).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Doctor added successfully",
            "doctor": doctor
        })),
    ))
}

#[axum::debug_handler]
pub async fn remove_doctor(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&state, &user).await?;

    state
        .doctors
        .remove(doctor_id)
        .await
        .map_err(|_| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!({
        "message": "Doctor removed successfully",
        "doctor_id": doctor_id
    })))
}

#[derive(Debug, Default, serde::Serialize)]
struct SpecialtyStats {
    total: usize,
    scheduled: usize,
    cancelled: usize,
    completed: usize,
}

#[axum::debug_handler]
pub async fn get_analytics(
    State(state): State<Arc<AuthCellState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    require_admin(&state, &user).await?;

    let appointments = state
        .appointments
        .list_all()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let count_status = |status: AppointmentStatus| {
        appointments.iter().filter(|a| a.status == status).count()
    };

    let mut specialty_stats: BTreeMap<String, SpecialtyStats> = BTreeMap::new();
    for appointment in &appointments {
        let entry = specialty_stats
            .entry(appointment.doctor_specialty.clone())
            .or_default();
        entry.total += 1;
        match appointment.status {
            AppointmentStatus::Scheduled => entry.scheduled += 1,
            AppointmentStatus::Cancelled => entry.cancelled += 1,
            AppointmentStatus::Completed => entry.completed += 1,
        }
    }

    let users = state.users.list_all().await;
    let active_users = users.iter().filter(|u| u.role != UserRole::Admin).count();

    Ok(Json(json!({
        "analytics": {
            "total_appointments": appointments.len(),
            "scheduled_appointments": count_status(AppointmentStatus::Scheduled),
            "cancelled_appointments": count_status(AppointmentStatus::Cancelled),
            "completed_appointments": count_status(AppointmentStatus::Completed),
            "specialty_stats": specialty_stats,
            "total_users": users.len(),
            "active_users": active_users,
        }
    })))
}
