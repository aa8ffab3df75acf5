use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentError, BookAppointmentRequest};
use appointment_cell::services::lifecycle::AppointmentLifecycleService;

use crate::models::{PaymentAppointmentData, PaymentError};
use crate::services::payment::PaymentService;

/// Stages of the booking flow. The UI used to drive these off timers; here
/// every transition is an explicit completion signal, so the machine is the
/// single source of truth for when the appointment actually gets created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    Details,
    Payment,
    UpiForm,
    GpayScan,
    Success,
    Closed,
}

/// What the patient has filled in so far. Date is optional until they pick
/// one; time and reason are empty strings until entered.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub doctor_image: String,
    pub consultation_fee: i64,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: String,
    pub reason: String,
    pub notes: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Action not valid in the current stage")]
    InvalidStage,

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Appointment(#[from] AppointmentError),
}

/// One patient's pass through the booking form. Both payment methods create
/// a pending payment record before the appointment exists; only the
/// confirmation signal creates the appointment. Backing out or closing at
/// any point leaves no appointment behind.
pub struct BookingWorkflow {
    patient_id: Uuid,
    stage: BookingStage,
    pub draft: BookingDraft,
    payment_id: Option<String>,
}

impl BookingWorkflow {
    pub fn new(patient_id: Uuid, draft: BookingDraft) -> Self {
        Self {
            patient_id,
            stage: BookingStage::Details,
            draft,
            payment_id: None,
        }
    }

    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    /// Details -> Payment. Date, time, and reason must all be filled in.
    pub fn proceed_to_payment(&mut self) -> Result<(), WorkflowError> {
        if self.stage != BookingStage::Details {
            return Err(WorkflowError::InvalidStage);
        }

        if self.draft.appointment_date.is_none() {
            return Err(WorkflowError::MissingField("appointment_date"));
        }
        if self.draft.appointment_time.trim().is_empty() {
            return Err(WorkflowError::MissingField("appointment_time"));
        }
        if self.draft.reason.trim().is_empty() {
            return Err(WorkflowError::MissingField("reason"));
        }

        self.stage = BookingStage::Payment;
        Ok(())
    }

    /// Payment -> UpiForm, creating the pending payment record.
    pub async fn select_upi(
        &mut self,
        payments: &PaymentService,
    ) -> Result<String, WorkflowError> {
        self.select_method(payments, BookingStage::UpiForm).await
    }

    /// Payment -> GpayScan, creating the pending payment record.
    pub async fn select_gpay(
        &mut self,
        payments: &PaymentService,
    ) -> Result<String, WorkflowError> {
        self.select_method(payments, BookingStage::GpayScan).await
    }

    async fn select_method(
        &mut self,
        payments: &PaymentService,
        next_stage: BookingStage,
    ) -> Result<String, WorkflowError> {
        if self.stage != BookingStage::Payment {
            return Err(WorkflowError::InvalidStage);
        }

        let payment_id = format!("PAY-{}", Uuid::new_v4());
        let payment = payments
            .create_pending(payment_id, self.appointment_data()?)
            .await?;

        debug!("Workflow payment {} pending", payment.payment_id);
        self.payment_id = Some(payment.payment_id.clone());
        self.stage = next_stage;
        Ok(payment.payment_id)
    }

    /// The payment-completed signal: flips the payment record to completed
    /// and only then creates the appointment.
    pub async fn confirm_payment(
        &mut self,
        payments: &PaymentService,
        lifecycle: &AppointmentLifecycleService,
    ) -> Result<Appointment, WorkflowError> {
        if !matches!(self.stage, BookingStage::UpiForm | BookingStage::GpayScan) {
            return Err(WorkflowError::InvalidStage);
        }

        let payment_id = self
            .payment_id
            .clone()
            .ok_or(WorkflowError::InvalidStage)?;
        payments.confirm(&payment_id).await?;

        let data = self.appointment_data()?;
        let appointment = lifecycle
            .create(
                self.patient_id,
                BookAppointmentRequest {
                    doctor_id: data.doctor_id,
                    doctor_name: data.doctor_name,
                    doctor_specialty: data.doctor_specialty,
                    doctor_image: data.doctor_image,
                    appointment_date: data.appointment_date,
                    appointment_time: data.appointment_time,
                    reason: data.reason,
                    notes: self.draft.notes.clone(),
                },
            )
            .await?;

        info!(
            "Workflow completed: payment {} confirmed, appointment {} created",
            payment_id, appointment.id
        );
        self.stage = BookingStage::Success;
        Ok(appointment)
    }

    /// Back to the details form. The draft is kept; an already-created
    /// payment record stays behind as a dangling pending entry, which is
    /// cosmetic.
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        match self.stage {
            BookingStage::Payment | BookingStage::UpiForm | BookingStage::GpayScan => {
                self.stage = BookingStage::Details;
                Ok(())
            }
            BookingStage::Details => Ok(()),
            _ => Err(WorkflowError::InvalidStage),
        }
    }

    /// Discard the workflow. No appointment is ever created afterwards.
    pub fn close(&mut self) {
        self.stage = BookingStage::Closed;
    }

    fn appointment_data(&self) -> Result<PaymentAppointmentData, WorkflowError> {
        let appointment_date = self
            .draft
            .appointment_date
            .ok_or(WorkflowError::MissingField("appointment_date"))?;

        Ok(PaymentAppointmentData {
            patient_id: self.patient_id,
            doctor_id: self.draft.doctor_id,
            doctor_name: self.draft.doctor_name.clone(),
            doctor_specialty: self.draft.doctor_specialty.clone(),
            doctor_image: self.draft.doctor_image.clone(),
            appointment_date,
            appointment_time: self.draft.appointment_time.clone(),
            reason: self.draft.reason.clone(),
            amount: self.draft.consultation_fee,
        })
    }
}
