use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A booked slot between a patient and a doctor. The doctor fields are a
/// denormalized snapshot taken at booking time; later edits to the doctor
/// directory do not flow back into existing appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub doctor_image: String,
    pub appointment_date: NaiveDate,
    /// Zero-padded "HH:MM" wall-clock time. Compared lexically, which is
    /// chronological for this format.
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub reason: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Booking request body. The patient id is never taken from the client;
/// it comes from the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub doctor_image: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub reason: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
