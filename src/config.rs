use std::env;

/// Runtime configuration. The week-grid geometry (hour range, day span,
/// week anchor) is deployment policy, not a scheduling invariant, so it
/// lives here rather than in the grid builder.
#[derive(Clone)]
pub struct Config {
    /// `sqlite://...` URL, or a plain/`csv://` directory path for the
    /// flat-file backend.
    pub database_url: String,
    pub grid_start_hour: u32,
    /// Inclusive. The default 13..=20 yields 8 hourly slots.
    pub grid_end_hour: u32,
    pub grid_days: u32,
    pub week_start: chrono::Weekday,
    pub appointment_id_prefix: String,
    pub appointment_id_width: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            grid_start_hour: env::var("GRID_START_HOUR")
                .unwrap_or_else(|_| "13".to_string())
                .parse()
                .expect("GRID_START_HOUR must be an hour (0-23)"),
            grid_end_hour: env::var("GRID_END_HOUR")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .expect("GRID_END_HOUR must be an hour (0-23)"),
            grid_days: env::var("GRID_DAYS")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .expect("GRID_DAYS must be a number"),
            week_start: env::var("WEEK_START")
                .unwrap_or_else(|_| "Sunday".to_string())
                .parse()
                .expect("WEEK_START must be a weekday name"),
            appointment_id_prefix: env::var("APPOINTMENT_ID_PREFIX")
                .unwrap_or_else(|_| "APT".to_string()),
            appointment_id_width: env::var("APPOINTMENT_ID_WIDTH")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("APPOINTMENT_ID_WIDTH must be a number"),
        }
    }

    /// Defaults matching the tutor-center deployment: Sunday-anchored
    /// 6-day window, 13:00-20:00 display hours, APT##### ids.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            grid_start_hour: 13,
            grid_end_hour: 20,
            grid_days: 6,
            week_start: chrono::Weekday::Sun,
            appointment_id_prefix: "APT".to_string(),
            appointment_id_width: 5,
        }
    }
}
