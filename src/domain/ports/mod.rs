use crate::domain::models::{
    appointment::Appointment, availability::AvailabilityWindow, course::Course, tutor::Tutor,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait TutorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tutor>, AppError>;
    async fn find_by_id(&self, tutor_id: &str) -> Result<Option<Tutor>, AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, AppError>;
    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, AppError>;
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<AvailabilityWindow>, AppError>;
    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<AvailabilityWindow>, AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>, AppError>;
    async fn find_by_id(&self, appointment_id: &str) -> Result<Option<Appointment>, AppError>;
    async fn list_by_tutor_date(
        &self,
        tutor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, AppError>;
    /// Appends a new row. The sole mutation a booking performs; no other
    /// appointment row is touched.
    async fn append(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
}

/// Users collaborator, used only as a booking convenience to fill in a
/// missing student name.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn resolve_name_by_email(&self, email: &str) -> Result<Option<String>, AppError>;
}
