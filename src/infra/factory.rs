use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::infra::repositories::{
    csv_appointment_repo::CsvAppointmentRepo, csv_availability_repo::CsvAvailabilityRepo,
    csv_course_repo::CsvCourseRepo, csv_store::CsvStore, csv_tutor_repo::CsvTutorRepo,
    csv_user_repo::CsvUserRepo, sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_availability_repo::SqliteAvailabilityRepo, sqlite_course_repo::SqliteCourseRepo,
    sqlite_tutor_repo::SqliteTutorRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

/// Wires the record-store backend from the configured URL: `sqlite:`
/// URLs get the sqlx pool, anything else is treated as a CSV data
/// directory (optionally prefixed `csv://`). The two backends are
/// interchangeable behind the ports.
pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("sqlite:") {
        info!("Initializing SQLite connection with WAL mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            tutor_repo: Arc::new(SqliteTutorRepo::new(pool.clone())),
            course_repo: Arc::new(SqliteCourseRepo::new(pool.clone())),
            availability_repo: Arc::new(SqliteAvailabilityRepo::new(pool.clone())),
            appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            user_directory: Arc::new(SqliteUserRepo::new(pool)),
        }
    } else {
        let dir = database_url
            .strip_prefix("csv://")
            .unwrap_or(database_url);
        info!("Initializing CSV record store in {}", dir);

        let store =
            Arc::new(CsvStore::new(dir).expect("Failed to initialize CSV data directory"));

        AppState {
            config: config.clone(),
            tutor_repo: Arc::new(CsvTutorRepo::new(store.clone())),
            course_repo: Arc::new(CsvCourseRepo::new(store.clone())),
            availability_repo: Arc::new(CsvAvailabilityRepo::new(store.clone())),
            appointment_repo: Arc::new(CsvAppointmentRepo::new(store.clone())),
            user_directory: Arc::new(CsvUserRepo::new(store)),
        }
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
