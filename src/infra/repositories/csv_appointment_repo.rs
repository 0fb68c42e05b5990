use crate::domain::models::appointment::Appointment;
use crate::domain::ports::AppointmentRepository;
use crate::error::AppError;
use crate::infra::repositories::csv_store::{CsvStore, APPOINTMENTS_FILE};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct CsvAppointmentRepo {
    store: Arc<CsvStore>,
}

impl CsvAppointmentRepo {
    pub fn new(store: Arc<CsvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AppointmentRepository for CsvAppointmentRepo {
    async fn list(&self) -> Result<Vec<Appointment>, AppError> {
        self.store.read_all(APPOINTMENTS_FILE)
    }

    async fn find_by_id(&self, appointment_id: &str) -> Result<Option<Appointment>, AppError> {
        let appointments: Vec<Appointment> = self.store.read_all(APPOINTMENTS_FILE)?;
        Ok(appointments
            .into_iter()
            .find(|a| a.appointment_id == appointment_id))
    }

    async fn list_by_tutor_date(
        &self,
        tutor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, AppError> {
        let appointments: Vec<Appointment> = self.store.read_all(APPOINTMENTS_FILE)?;
        Ok(appointments
            .into_iter()
            .filter(|a| a.tutor_id == tutor_id && a.appointment_date == date)
            .collect())
    }

    async fn append(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let row = appointment.clone();
        self.store
            .rewrite(APPOINTMENTS_FILE, move |mut rows: Vec<Appointment>| {
                rows.push(row);
                Ok(rows)
            })?;
        Ok(appointment.clone())
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let row = appointment.clone();
        self.store
            .rewrite(APPOINTMENTS_FILE, move |mut rows: Vec<Appointment>| {
                let slot = rows
                    .iter_mut()
                    .find(|a| a.appointment_id == row.appointment_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!(
                            "Appointment {} not found",
                            row.appointment_id
                        ))
                    })?;
                *slot = row;
                Ok(rows)
            })?;
        Ok(appointment.clone())
    }
}
