use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use uuid::Uuid;

use appointment_cell::models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest,
};
use appointment_cell::services::classifier;
use appointment_cell::services::lifecycle::AppointmentLifecycleService;
use appointment_cell::store::{AppointmentStore, MemoryAppointmentStore};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn book_request(day: &str, time: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        doctor_id: Uuid::new_v4(),
        doctor_name: "Dr. Sarah Johnson".to_string(),
        doctor_specialty: "Cardiology".to_string(),
        doctor_image: "https://images.clinic.local/doctors/dr-sarah-johnson.jpg".to_string(),
        appointment_date: date(day),
        appointment_time: time.to_string(),
        reason: "Chest pain follow-up".to_string(),
        notes: None,
    }
}

fn service() -> (AppointmentLifecycleService, Arc<MemoryAppointmentStore>) {
    let store = Arc::new(MemoryAppointmentStore::new());
    (AppointmentLifecycleService::new(store.clone()), store)
}

#[tokio::test]
async fn created_appointment_is_scheduled_and_owned_by_caller() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    let appointment = service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.patient_id, patient);
    assert!(!appointment.id.is_nil());
}

#[tokio::test]
async fn upcoming_and_past_are_exact_complements() {
    let patient = Uuid::new_v4();
    let (service, store) = service();

    for (day, time) in [
        ("2025-06-01", "08:00"),
        ("2025-06-15", "09:30"),
        ("2025-07-01", "16:00"),
    ] {
        service.create(patient, book_request(day, time)).await.unwrap();
    }
    // A cancelled one on a future date
    let cancelled = service
        .create(patient, book_request("2025-08-01", "10:00"))
        .await
        .unwrap();
    service.cancel(patient, cancelled.id).await.unwrap();

    let all = store.find_by_patient(patient).await.unwrap();
    for now in ["2025-05-01", "2025-06-15", "2025-09-01"] {
        let today = date(now);
        for appointment in &all {
            assert_eq!(
                classifier::is_upcoming(appointment, today),
                !classifier::is_past(appointment, today),
                "complement violated for {} at now={}",
                appointment.appointment_date,
                now
            );
        }
    }
}

#[tokio::test]
async fn same_day_is_upcoming_regardless_of_time() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    // Early-morning slot: still upcoming for the whole calendar day.
    let appointment = service
        .create(patient, book_request("2025-06-10", "00:05"))
        .await
        .unwrap();

    assert!(classifier::is_upcoming(&appointment, date("2025-06-10")));
    assert!(classifier::is_past(&appointment, date("2025-06-11")));
}

#[tokio::test]
async fn boundary_scenario_flips_between_upcoming_and_past() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();

    let upcoming = service.list_upcoming(patient, date("2025-06-09")).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    let past = service.list_past(patient, date("2025-06-09")).await.unwrap();
    assert!(past.is_empty());

    let upcoming = service.list_upcoming(patient, date("2025-06-11")).await.unwrap();
    assert!(upcoming.is_empty());
    let past = service.list_past(patient, date("2025-06-11")).await.unwrap();
    assert_eq!(past.len(), 1);
}

#[tokio::test]
async fn cancelled_future_appointment_lands_in_past_only() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    let appointment = service
        .create(patient, book_request("2025-12-24", "11:00"))
        .await
        .unwrap();
    service.cancel(patient, appointment.id).await.unwrap();

    let today = date("2025-06-01");
    let upcoming = service.list_upcoming(patient, today).await.unwrap();
    assert!(upcoming.is_empty());

    let past = service.list_past(patient, today).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn cancel_twice_reapplies_cancelled() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    let appointment = service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();

    let first = service.cancel(patient, appointment.id).await.unwrap();
    assert_eq!(first.status, AppointmentStatus::Cancelled);

    let second = service.cancel(patient, appointment.id).await.unwrap();
    assert_eq!(second.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn cancel_of_foreign_appointment_is_not_found_and_mutates_nothing() {
    let (service, store) = service();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let appointment = service
        .create(owner, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();

    let result = service.cancel(intruder, appointment.id).await;
    assert_matches!(result, Err(AppointmentError::NotFound));

    let records = store.find_by_patient(owner).await.unwrap();
    assert_eq!(records[0].status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn cancel_of_unknown_id_is_not_found_and_leaves_store_unchanged() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();

    let result = service.cancel(patient, Uuid::new_v4()).await;
    assert_matches!(result, Err(AppointmentError::NotFound));

    let all = service.list_all_for_patient(patient).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn listings_are_sorted_by_date_then_time() {
    let (service, _) = service();
    let patient = Uuid::new_v4();
    let today = date("2025-06-01");

    for (day, time) in [
        ("2025-06-20", "14:00"),
        ("2025-06-10", "09:00"),
        ("2025-06-10", "08:00"),
        ("2025-07-01", "10:00"),
    ] {
        service.create(patient, book_request(day, time)).await.unwrap();
    }
    // Two past entries for the descending check
    for (day, time) in [("2025-05-01", "09:00"), ("2025-05-20", "11:00")] {
        service.create(patient, book_request(day, time)).await.unwrap();
    }

    let upcoming = service.list_upcoming(patient, today).await.unwrap();
    let keys: Vec<_> = upcoming
        .iter()
        .map(|a| (a.appointment_date, a.appointment_time.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "upcoming must be non-decreasing");

    let past = service.list_past(patient, today).await.unwrap();
    let keys: Vec<_> = past
        .iter()
        .map(|a| (a.appointment_date, a.appointment_time.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(keys, sorted, "past must be non-increasing");
}

#[tokio::test]
async fn identical_slots_are_both_kept_in_insertion_order() {
    let (service, _) = service();
    let patient = Uuid::new_v4();

    let first = service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();
    let second = service
        .create(patient, book_request("2025-06-10", "09:00"))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let upcoming = service.list_upcoming(patient, date("2025-06-01")).await.unwrap();
    assert_eq!(upcoming.len(), 2);
    // Stable sort: ties stay in insertion order.
    assert_eq!(upcoming[0].id, first.id);
    assert_eq!(upcoming[1].id, second.id);
}

#[tokio::test]
async fn listings_only_contain_the_callers_appointments() {
    let (service, _) = service();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    service.create(alice, book_request("2025-06-10", "09:00")).await.unwrap();
    service.create(bob, book_request("2025-06-11", "10:00")).await.unwrap();

    let alices = service.list_all_for_patient(alice).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].patient_id, alice);
}

#[tokio::test]
async fn store_assigns_id_when_left_nil() {
    let store = MemoryAppointmentStore::new();
    let record = Appointment {
        id: Uuid::nil(),
        patient_id: Uuid::new_v4(),
        doctor_id: Uuid::new_v4(),
        doctor_name: "Dr. Michael Chen".to_string(),
        doctor_specialty: "Dermatology".to_string(),
        doctor_image: "https://images.clinic.local/doctors/dr-michael-chen.jpg".to_string(),
        appointment_date: date("2025-06-10"),
        appointment_time: "09:00".to_string(),
        status: AppointmentStatus::Scheduled,
        reason: "Rash".to_string(),
        notes: None,
        created_at: chrono::Utc::now(),
    };

    let stored = store.insert(record).await.unwrap();
    assert!(!stored.id.is_nil());
}
