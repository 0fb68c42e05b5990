use crate::domain::models::appointment::{
    Appointment, BookingType, ConfirmationStatus, NewAppointmentParams,
};
use crate::domain::models::availability::AvailabilityWindow;
use crate::domain::services::availability::windows_for;
use crate::domain::services::slots::{classify_slot, SlotStatus};
use crate::domain::services::week_grid::{assemble_week, normalize_to_week_start, WeekGrid};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Duration, NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct BookingRequest {
    pub tutor_id: String,
    pub student_email: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub student_name: Option<String>,
    pub notes: Option<String>,
    pub booking_type: BookingType,
}

/// The scheduling core's public surface: `resolve`, `evaluate`, `book`,
/// `cancel`, `build_week`. Holds no appointment state between calls;
/// every operation works on a fresh snapshot from the record store.
pub struct Scheduler {
    state: Arc<AppState>,
    // Serializes the evaluate-then-append window of book() per tutor,
    // closing the check-then-act race between concurrent bookings.
    // Entries are never evicted; the map is bounded by the tutor roster.
    tutor_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    // Id assignment scans the whole table, so it is serialized globally;
    // bookings for different tutors must still get distinct ids.
    sequence_lock: Mutex<()>,
}

impl Scheduler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            tutor_locks: Mutex::new(HashMap::new()),
            sequence_lock: Mutex::new(()),
        }
    }

    async fn lock_for_tutor(&self, tutor_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.tutor_locks.lock().await;
        locks
            .entry(tutor_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Availability Resolver: the recurring windows that apply to this
    /// tutor on this calendar date. Empty means the tutor does not work
    /// that day.
    pub async fn resolve(
        &self,
        tutor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AvailabilityWindow>, AppError> {
        let windows = self.state.availability_repo.list_by_tutor(tutor_id).await?;
        Ok(windows_for(&windows, tutor_id, date))
    }

    /// Slot Status Evaluator for a single (tutor, date, time) slot.
    pub async fn evaluate(
        &self,
        tutor_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<SlotStatus, AppError> {
        let windows = self.resolve(tutor_id, date).await?;
        let appointments = self
            .state
            .appointment_repo
            .list_by_tutor_date(tutor_id, date)
            .await?;
        Ok(classify_slot(&windows, &appointments, time))
    }

    /// Booking Engine. Validates the request, re-checks the slot inside
    /// the per-tutor critical section, assigns the next sequential id,
    /// and appends the appointment.
    pub async fn book(&self, request: BookingRequest) -> Result<Appointment, AppError> {
        if request.start_time >= request.end_time {
            return Err(AppError::Validation(
                "start_time must be before end_time".into(),
            ));
        }

        let tutor = self
            .state
            .tutor_repo
            .find_by_id(&request.tutor_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tutor {} not found", request.tutor_id)))?;

        let course = self
            .state
            .course_repo
            .find_by_id(&request.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course {} not found", request.course_id))
            })?;

        let lock = self.lock_for_tutor(&request.tutor_id).await;
        let _guard = lock.lock().await;

        let windows = self.resolve(&request.tutor_id, request.date).await?;
        let mut day_appointments = self
            .state
            .appointment_repo
            .list_by_tutor_date(&request.tutor_id, request.date)
            .await?;

        let status = classify_slot(&windows, &day_appointments, request.start_time);

        let bookable = match status {
            SlotStatus::Available => true,
            // Administrative override: a tentative hold may be displaced
            // by an admin-scheduled booking, never by a second student.
            SlotStatus::Pending => request.booking_type == BookingType::AdminScheduled,
            SlotStatus::Booked | SlotStatus::Unavailable => false,
        };

        if !bookable {
            warn!(
                tutor_id = %request.tutor_id,
                date = %request.date,
                time = %request.start_time,
                ?status,
                "booking rejected: slot not bookable"
            );
            return Err(AppError::SlotUnavailable(format!(
                "Slot {} {} for tutor {} is not bookable",
                request.date, request.start_time, request.tutor_id
            )));
        }

        // Only tentative (unconfirmed) holds may yield to an admin
        // override; every other blocking overlap rejects the request.
        // The evaluator classifies the start instant, so this also
        // catches a longer request running into a later appointment.
        let displacing = status == SlotStatus::Pending;
        let yields = |a: &Appointment| {
            displacing && a.confirmation_status == ConfirmationStatus::Pending
        };
        if day_appointments.iter().any(|a| {
            a.status.blocks_slot()
                && a.overlaps(request.start_time, request.end_time)
                && !yields(a)
        }) {
            return Err(AppError::SlotUnavailable(format!(
                "Requested interval {}-{} overlaps an existing appointment",
                request.start_time, request.end_time
            )));
        }

        if displacing {
            // Displace the tentative hold(s) so the tutor/date never
            // carries two live appointments over the same interval.
            for held in day_appointments.iter_mut() {
                if held.status.blocks_slot()
                    && held.confirmation_status == ConfirmationStatus::Pending
                    && held.overlaps(request.start_time, request.end_time)
                {
                    info!(
                        appointment_id = %held.appointment_id,
                        "displacing tentative hold for admin booking"
                    );
                    held.cancel();
                    self.state.appointment_repo.update(held).await?;
                }
            }
        }

        let student_name = match request.student_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                match self
                    .state
                    .user_directory
                    .resolve_name_by_email(&request.student_email)
                    .await?
                {
                    Some(name) => name,
                    None => name_from_email(&request.student_email),
                }
            }
        };

        let _sequence_guard = self.sequence_lock.lock().await;
        let existing = self.state.appointment_repo.list().await?;
        let appointment_id = next_appointment_id(
            &existing,
            &self.state.config.appointment_id_prefix,
            self.state.config.appointment_id_width,
        );

        let appointment = Appointment::new(
            appointment_id,
            NewAppointmentParams {
                tutor_id: request.tutor_id,
                student_name,
                student_email: request.student_email,
                course_id: request.course_id,
                appointment_date: request.date,
                start_time: request.start_time,
                end_time: request.end_time,
                booking_type: request.booking_type,
                notes: request.notes,
            },
        );

        let created = self.state.appointment_repo.append(&appointment).await?;
        info!(
            appointment_id = %created.appointment_id,
            tutor = %tutor.display_name,
            course = %course.course_name,
            date = %created.appointment_date,
            "appointment booked"
        );
        Ok(created)
    }

    /// Cancellation Engine. Idempotent terminal transition; re-cancelling
    /// an already cancelled appointment succeeds as a no-op.
    pub async fn cancel(&self, appointment_id: &str) -> Result<(), AppError> {
        let mut appointment = self
            .state
            .appointment_repo
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Appointment {} not found", appointment_id))
            })?;

        appointment.cancel();
        self.state.appointment_repo.update(&appointment).await?;
        info!(appointment_id = %appointment_id, "appointment cancelled");
        Ok(())
    }

    /// Week Grid Builder. Normalizes `start_date` back to the configured
    /// week anchor and materializes the display window.
    pub async fn build_week(
        &self,
        start_date: NaiveDate,
        tutor_ids: Option<&[String]>,
    ) -> Result<WeekGrid, AppError> {
        let config = &self.state.config;
        let anchor = normalize_to_week_start(start_date, config.week_start);

        let dates: Vec<NaiveDate> = (0..config.grid_days as i64)
            .map(|offset| anchor + Duration::days(offset))
            .collect();
        let hours: Vec<u32> = (config.grid_start_hour..=config.grid_end_hour).collect();

        let mut tutors = self.state.tutor_repo.list().await?;
        if let Some(ids) = tutor_ids {
            tutors.retain(|t| ids.iter().any(|id| id == &t.tutor_id));
        }

        let windows = self.state.availability_repo.list().await?;
        let appointments = self.state.appointment_repo.list().await?;

        Ok(assemble_week(&tutors, &windows, &appointments, &dates, &hours))
    }
}

/// Next id in the `APT#####` sequence: maximum existing numeric suffix
/// plus one, zero-padded to `width`.
pub fn next_appointment_id(existing: &[Appointment], prefix: &str, width: usize) -> String {
    let max_seq = existing
        .iter()
        .filter_map(|a| a.appointment_id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:0width$}", prefix, max_seq + 1, width = width)
}

fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
