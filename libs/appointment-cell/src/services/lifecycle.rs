use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest};
use crate::services::classifier;
use crate::store::AppointmentStore;

/// Orchestrates appointment creation, cancellation, and the classified
/// listing queries over an injected store.
pub struct AppointmentLifecycleService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentLifecycleService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    /// Pure data entry: no future-date validation, no availability lookup,
    /// and no conflict detection against existing bookings for the same
    /// doctor or slot. Each call creates a new record, even for input
    /// identical to an earlier booking.
    pub async fn create(
        &self,
        caller_id: Uuid,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: caller_id,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            doctor_specialty: request.doctor_specialty,
            doctor_image: request.doctor_image,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            status: AppointmentStatus::Scheduled,
            reason: request.reason,
            notes: request.notes,
            created_at: Utc::now(),
        };

        let stored = self.store.insert(appointment).await?;
        info!(
            "Appointment {} created for patient {} on {} {}",
            stored.id, stored.patient_id, stored.appointment_date, stored.appointment_time
        );
        Ok(stored)
    }

    /// Scheduled -> cancelled is the only transition in scope. Cancelling an
    /// already-cancelled appointment just re-applies the status; the miss
    /// case (unknown id or someone else's appointment) is NotFound.
    pub async fn cancel(
        &self,
        caller_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Cancelling appointment {} for patient {}",
            appointment_id, caller_id
        );
        let cancelled = self
            .store
            .update_status(appointment_id, caller_id, AppointmentStatus::Cancelled)
            .await?;

        info!("Appointment {} cancelled", cancelled.id);
        Ok(cancelled)
    }

    pub async fn list_upcoming(
        &self,
        caller_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.store.find_by_patient(caller_id).await?;
        appointments.retain(|a| classifier::is_upcoming(a, today));
        classifier::sort_ascending(&mut appointments);
        Ok(appointments)
    }

    pub async fn list_past(
        &self,
        caller_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.store.find_by_patient(caller_id).await?;
        appointments.retain(|a| classifier::is_past(a, today));
        classifier::sort_descending(&mut appointments);
        Ok(appointments)
    }

    /// The unfiltered listing behind GET /appointments, soonest first.
    pub async fn list_all_for_patient(
        &self,
        caller_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self.store.find_by_patient(caller_id).await?;
        classifier::sort_ascending(&mut appointments);
        Ok(appointments)
    }

    /// Every record regardless of patient, for the admin surface.
    pub async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        self.store.list_all().await
    }
}
