use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use uuid::Uuid;

use appointment_cell::services::lifecycle::AppointmentLifecycleService;
use appointment_cell::store::{AppointmentStore, MemoryAppointmentStore};
use payment_cell::models::{PaymentError, PaymentStatus};
use payment_cell::services::payment::PaymentService;
use payment_cell::services::workflow::{
    BookingDraft, BookingStage, BookingWorkflow, WorkflowError,
};
use payment_cell::store::MemoryPaymentStore;

struct Fixture {
    payments: PaymentService,
    lifecycle: AppointmentLifecycleService,
    appointment_store: Arc<MemoryAppointmentStore>,
}

fn fixture() -> Fixture {
    let appointment_store = Arc::new(MemoryAppointmentStore::new());
    Fixture {
        payments: PaymentService::new(Arc::new(MemoryPaymentStore::new())),
        lifecycle: AppointmentLifecycleService::new(appointment_store.clone()),
        appointment_store,
    }
}

fn filled_draft() -> BookingDraft {
    BookingDraft {
        doctor_id: Uuid::new_v4(),
        doctor_name: "Dr. James Wilson".to_string(),
        doctor_specialty: "Orthopedics".to_string(),
        doctor_image: "https://images.clinic.local/doctors/dr-james-wilson.jpg".to_string(),
        consultation_fee: 180,
        appointment_date: Some(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
        appointment_time: "09:00".to_string(),
        reason: "Knee pain".to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn details_stage_requires_date_time_and_reason() {
    let mut draft = filled_draft();
    draft.reason = "   ".to_string();
    let mut workflow = BookingWorkflow::new(Uuid::new_v4(), draft);

    let result = workflow.proceed_to_payment();
    assert_matches!(result, Err(WorkflowError::MissingField("reason")));
    assert_eq!(workflow.stage(), BookingStage::Details);

    let mut draft = filled_draft();
    draft.appointment_date = None;
    let mut workflow = BookingWorkflow::new(Uuid::new_v4(), draft);
    assert_matches!(
        workflow.proceed_to_payment(),
        Err(WorkflowError::MissingField("appointment_date"))
    );

    let mut draft = filled_draft();
    draft.appointment_time = String::new();
    let mut workflow = BookingWorkflow::new(Uuid::new_v4(), draft);
    assert_matches!(
        workflow.proceed_to_payment(),
        Err(WorkflowError::MissingField("appointment_time"))
    );
}

#[tokio::test]
async fn upi_path_creates_pending_payment_then_appointment_on_confirm() {
    let f = fixture();
    let patient = Uuid::new_v4();
    let mut workflow = BookingWorkflow::new(patient, filled_draft());

    workflow.proceed_to_payment().unwrap();
    let payment_id = workflow.select_upi(&f.payments).await.unwrap();
    assert_eq!(workflow.stage(), BookingStage::UpiForm);

    // Payment exists and is pending before any appointment does.
    let payment = f.payments.get(&payment_id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.appointment_data.amount, 180);
    assert!(f.lifecycle.list_all_for_patient(patient).await.unwrap().is_empty());

    let appointment = workflow
        .confirm_payment(&f.payments, &f.lifecycle)
        .await
        .unwrap();
    assert_eq!(workflow.stage(), BookingStage::Success);
    assert_eq!(appointment.patient_id, patient);

    let payment = f.payments.get(&payment_id).await.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);

    let booked = f.lifecycle.list_all_for_patient(patient).await.unwrap();
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].id, appointment.id);
}

#[tokio::test]
async fn gpay_path_behaves_like_upi() {
    let f = fixture();
    let patient = Uuid::new_v4();
    let mut workflow = BookingWorkflow::new(patient, filled_draft());

    workflow.proceed_to_payment().unwrap();
    let payment_id = workflow.select_gpay(&f.payments).await.unwrap();
    assert_eq!(workflow.stage(), BookingStage::GpayScan);
    assert_eq!(
        f.payments.get(&payment_id).await.unwrap().status,
        PaymentStatus::Pending
    );

    workflow.confirm_payment(&f.payments, &f.lifecycle).await.unwrap();
    assert_eq!(
        f.payments.get(&payment_id).await.unwrap().status,
        PaymentStatus::Completed
    );
    assert_eq!(f.lifecycle.list_all_for_patient(patient).await.unwrap().len(), 1);
}

#[tokio::test]
async fn back_returns_to_details_without_creating_an_appointment() {
    let f = fixture();
    let patient = Uuid::new_v4();
    let mut workflow = BookingWorkflow::new(patient, filled_draft());

    workflow.proceed_to_payment().unwrap();
    workflow.select_upi(&f.payments).await.unwrap();
    workflow.back().unwrap();
    assert_eq!(workflow.stage(), BookingStage::Details);

    assert!(f.lifecycle.list_all_for_patient(patient).await.unwrap().is_empty());
}

#[tokio::test]
async fn closed_workflow_rejects_every_signal() {
    let f = fixture();
    let patient = Uuid::new_v4();
    let mut workflow = BookingWorkflow::new(patient, filled_draft());

    workflow.proceed_to_payment().unwrap();
    workflow.select_gpay(&f.payments).await.unwrap();
    workflow.close();
    assert_eq!(workflow.stage(), BookingStage::Closed);

    assert_matches!(
        workflow.confirm_payment(&f.payments, &f.lifecycle).await,
        Err(WorkflowError::InvalidStage)
    );
    assert_matches!(workflow.proceed_to_payment(), Err(WorkflowError::InvalidStage));
    assert!(f.lifecycle.list_all_for_patient(patient).await.unwrap().is_empty());
    assert!(f.appointment_store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn payment_method_cannot_be_selected_twice() {
    let f = fixture();
    let mut workflow = BookingWorkflow::new(Uuid::new_v4(), filled_draft());

    workflow.proceed_to_payment().unwrap();
    workflow.select_upi(&f.payments).await.unwrap();
    assert_matches!(
        workflow.select_gpay(&f.payments).await,
        Err(WorkflowError::InvalidStage)
    );
}

#[tokio::test]
async fn payment_service_round_trip_and_not_found() {
    let f = fixture();

    let result = f.payments.get("PAY-does-not-exist").await;
    assert_matches!(result, Err(PaymentError::NotFound));

    let mut workflow = BookingWorkflow::new(Uuid::new_v4(), filled_draft());
    workflow.proceed_to_payment().unwrap();
    let payment_id = workflow.select_upi(&f.payments).await.unwrap();

    let cancelled = f.payments.cancel(&payment_id).await.unwrap();
    assert_eq!(cancelled.status, PaymentStatus::Cancelled);
    assert!(cancelled.updated_at >= cancelled.created_at);
}
