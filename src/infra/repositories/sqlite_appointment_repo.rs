use crate::domain::models::appointment::Appointment;
use crate::domain::ports::AppointmentRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteAppointmentRepo {
    pool: SqlitePool,
}

impl SqliteAppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepo {
    async fn list(&self) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments ORDER BY appointment_id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, appointment_id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE appointment_id = ?")
            .bind(appointment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_tutor_date(
        &self,
        tutor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE tutor_id = ? AND appointment_date = ?",
        )
        .bind(tutor_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn append(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (appointment_id, tutor_id, student_name, student_email, course_id, appointment_date, start_time, end_time, status, booking_type, confirmation_status, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&appointment.appointment_id)
        .bind(&appointment.tutor_id)
        .bind(&appointment.student_name)
        .bind(&appointment.student_email)
        .bind(&appointment.course_id)
        .bind(appointment.appointment_date)
        .bind(appointment.start_time)
        .bind(appointment.end_time)
        .bind(appointment.status)
        .bind(appointment.booking_type)
        .bind(appointment.confirmation_status)
        .bind(&appointment.notes)
        .bind(appointment.created_at)
        .bind(appointment.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let updated = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments
             SET status = ?, confirmation_status = ?, student_name = ?, student_email = ?,
                 appointment_date = ?, start_time = ?, end_time = ?, notes = ?, updated_at = ?
             WHERE appointment_id = ?
             RETURNING *",
        )
        .bind(appointment.status)
        .bind(appointment.confirmation_status)
        .bind(&appointment.student_name)
        .bind(&appointment.student_email)
        .bind(appointment.appointment_date)
        .bind(appointment.start_time)
        .bind(appointment.end_time)
        .bind(&appointment.notes)
        .bind(appointment.updated_at)
        .bind(&appointment.appointment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        updated.ok_or_else(|| {
            AppError::NotFound(format!("Appointment {} not found", appointment.appointment_id))
        })
    }
}
