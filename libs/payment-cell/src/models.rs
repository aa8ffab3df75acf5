use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A simulated payment. No money moves anywhere; these records exist so the
/// booking workflow has something to flip from pending to completed before
/// the appointment is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Caller-chosen identifier, unique across payments.
    pub payment_id: String,
    pub appointment_data: PaymentAppointmentData,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The appointment draft a payment was taken for, carried verbatim so the
/// confirmation page can render it without another lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAppointmentData {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub doctor_image: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub reason: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Cancelled,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub payment_id: String,
    pub appointment_data: PaymentAppointmentData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment not found")]
    NotFound,

    #[error("Payment already exists")]
    DuplicateId,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
