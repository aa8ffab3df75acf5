use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-mostly reference data. Appointments copy the relevant fields out of
/// this record at booking time rather than joining against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub experience_years: i32,
    pub consultation_fee: i64,
    pub image_url: String,
    pub available_days: Vec<String>,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub full_name: String,
    pub specialty: String,
    pub experience_years: i32,
    pub consultation_fee: i64,
    pub image_url: String,
    pub available_days: Vec<String>,
    pub rating: f32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,
}
