use chrono::{NaiveDate, NaiveTime};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use tutor_scheduling::config::Config;
use tutor_scheduling::domain::models::appointment::BookingType;
use tutor_scheduling::domain::services::scheduler::{BookingRequest, Scheduler};
use tutor_scheduling::infra::repositories::{
    sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_availability_repo::SqliteAvailabilityRepo, sqlite_course_repo::SqliteCourseRepo,
    sqlite_tutor_repo::SqliteTutorRepo, sqlite_user_repo::SqliteUserRepo,
};
use tutor_scheduling::state::AppState;

#[allow(dead_code)]
pub struct TestApp {
    pub scheduler: Arc<Scheduler>,
    pub state: Arc<AppState>,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config::for_database(db_url);

        let state = Arc::new(AppState {
            config,
            tutor_repo: Arc::new(SqliteTutorRepo::new(pool.clone())),
            course_repo: Arc::new(SqliteCourseRepo::new(pool.clone())),
            availability_repo: Arc::new(SqliteAvailabilityRepo::new(pool.clone())),
            appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            user_directory: Arc::new(SqliteUserRepo::new(pool.clone())),
        });

        let scheduler = Arc::new(Scheduler::new(state.clone()));

        Self {
            scheduler,
            state,
            pool,
            db_filename,
        }
    }

    #[allow(dead_code)]
    pub async fn seed_tutor(&self, tutor_id: &str, display_name: &str) {
        sqlx::query("INSERT INTO tutors (tutor_id, display_name) VALUES (?, ?)")
            .bind(tutor_id)
            .bind(display_name)
            .execute(&self.pool)
            .await
            .expect("Failed to seed tutor");
    }

    #[allow(dead_code)]
    pub async fn seed_course(&self, course_id: &str, course_name: &str) {
        sqlx::query("INSERT INTO courses (course_id, course_name) VALUES (?, ?)")
            .bind(course_id)
            .bind(course_name)
            .execute(&self.pool)
            .await
            .expect("Failed to seed course");
    }

    #[allow(dead_code)]
    pub async fn seed_user(&self, email: &str, display_name: &str) {
        sqlx::query("INSERT INTO users (email, display_name) VALUES (?, ?)")
            .bind(email)
            .bind(display_name)
            .execute(&self.pool)
            .await
            .expect("Failed to seed user");
    }

    #[allow(dead_code)]
    #[allow(clippy::too_many_arguments)]
    pub async fn seed_window(
        &self,
        availability_id: &str,
        tutor_id: &str,
        day_of_week: &str,
        start_time: &str,
        end_time: &str,
        effective_date: &str,
        end_date: &str,
        slot_status: &str,
    ) {
        sqlx::query(
            "INSERT INTO availability_windows
             (availability_id, tutor_id, day_of_week, start_time, end_time, effective_date, end_date, slot_status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(availability_id)
        .bind(tutor_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .bind(effective_date)
        .bind(end_date)
        .bind(slot_status)
        .execute(&self.pool)
        .await
        .expect("Failed to seed availability window");
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[allow(dead_code)]
pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
}

#[allow(dead_code)]
pub fn student_request(
    tutor_id: &str,
    email: &str,
    course_id: &str,
    day: &str,
    start: &str,
    end: &str,
) -> BookingRequest {
    BookingRequest {
        tutor_id: tutor_id.to_string(),
        student_email: email.to_string(),
        course_id: course_id.to_string(),
        date: date(day),
        start_time: time(start),
        end_time: time(end),
        student_name: None,
        notes: None,
        booking_type: BookingType::StudentBooked,
    }
}

#[allow(dead_code)]
pub fn admin_request(
    tutor_id: &str,
    email: &str,
    course_id: &str,
    day: &str,
    start: &str,
    end: &str,
) -> BookingRequest {
    BookingRequest {
        booking_type: BookingType::AdminScheduled,
        ..student_request(tutor_id, email, course_id, day, start, end)
    }
}
