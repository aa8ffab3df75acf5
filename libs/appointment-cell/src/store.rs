use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentError, AppointmentStatus};

/// Persistence seam for appointments. Handlers and services only see this
/// trait, so tests run against the in-memory store and a persistent backend
/// can be swapped in without touching the lifecycle logic.
///
/// Ordering of returned sequences is unspecified; sorting is the caller's
/// responsibility. Each method is atomic with respect to the others, which is
/// the only concurrency discipline the appointment flows need - no operation
/// spans more than one record.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Persist a record, assigning an id when the caller left it nil.
    /// Identical date/time bookings for the same patient are all kept;
    /// the store never deduplicates.
    async fn insert(&self, record: Appointment) -> Result<Appointment, AppointmentError>;

    async fn find_by_patient(&self, patient_id: Uuid)
        -> Result<Vec<Appointment>, AppointmentError>;

    /// Overwrite the status of the record matching BOTH id and patient_id.
    /// Ownership is enforced here: a wrong patient_id is indistinguishable
    /// from a missing record.
    async fn update_status(
        &self,
        id: Uuid,
        patient_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError>;

    /// Every record, for the admin surface.
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError>;
}

/// In-memory store backing the single-process deployment and the test
/// suites. Insertion order is preserved, which the stable listing sorts
/// rely on for tie-breaks.
pub struct MemoryAppointmentStore {
    records: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryAppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn insert(&self, mut record: Appointment) -> Result<Appointment, AppointmentError> {
        if record.id.is_nil() {
            record.id = Uuid::new_v4();
        }

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_patient(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        patient_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|a| a.id == id && a.patient_id == patient_id)
            .ok_or(AppointmentError::NotFound)?;

        record.status = new_status;
        Ok(record.clone())
    }

    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.records.read().await.clone())
    }
}
