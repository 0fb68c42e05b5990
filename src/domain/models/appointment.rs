use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "no-show")]
    #[sqlx(rename = "no-show")]
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this status occupies its time slot.
    /// Cancelled and no-show appointments free the slot.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Completed)
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BookingType {
    StudentBooked,
    AdminScheduled,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub appointment_id: String,
    pub tutor_id: String,
    pub student_name: String,
    pub student_email: String,
    pub course_id: String,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub booking_type: BookingType,
    pub confirmation_status: ConfirmationStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub tutor_id: String,
    pub student_name: String,
    pub student_email: String,
    pub course_id: String,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booking_type: BookingType,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn new(appointment_id: String, params: NewAppointmentParams) -> Self {
        let now = Utc::now();
        Self {
            appointment_id,
            tutor_id: params.tutor_id,
            student_name: params.student_name,
            student_email: params.student_email,
            course_id: params.course_id,
            appointment_date: params.appointment_date,
            start_time: params.start_time,
            end_time: params.end_time,
            status: AppointmentStatus::Scheduled,
            booking_type: params.booking_type,
            confirmation_status: ConfirmationStatus::Pending,
            notes: params.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Half-open containment: `[start_time, end_time)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start_time <= time && time < self.end_time
    }

    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time < end && start < self.end_time
    }

    /// Terminal transition. Idempotent: re-cancelling an already
    /// cancelled appointment is a no-op success.
    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
        self.confirmation_status = ConfirmationStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}
