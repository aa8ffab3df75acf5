use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{Appointment, AppointmentStatus};

/// Upcoming means scheduled and dated today-or-later. The boundary is the
/// calendar date only: an appointment later today at an hour that has already
/// passed still counts as upcoming until the date itself changes. This
/// coarse-grained boundary is intentional - do not refine it to time-of-day.
pub fn is_upcoming(appointment: &Appointment, today: NaiveDate) -> bool {
    appointment.status == AppointmentStatus::Scheduled && appointment.appointment_date >= today
}

/// Exact complement of [`is_upcoming`]. A cancelled appointment on a future
/// date is "past": status overrides date for the history bucket.
pub fn is_past(appointment: &Appointment, today: NaiveDate) -> bool {
    !is_upcoming(appointment, today)
}

fn slot_key(appointment: &Appointment) -> (NaiveDate, &str) {
    (appointment.appointment_date, appointment.appointment_time.as_str())
}

fn compare_slots(a: &Appointment, b: &Appointment) -> Ordering {
    slot_key(a).cmp(&slot_key(b))
}

/// Soonest first. Stable, so bookings with an identical date and time keep
/// their insertion order.
pub fn sort_ascending(appointments: &mut [Appointment]) {
    appointments.sort_by(compare_slots);
}

/// Most recent first.
pub fn sort_descending(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| compare_slots(b, a));
}
