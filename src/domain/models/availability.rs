use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Weekday as persisted in the availability table ("Monday".."Sunday").
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum WindowStatus {
    Available,
    Unavailable,
}

/// A recurring weekly time range during which a tutor accepts
/// appointments, bounded by an effective-date range. Created by admin
/// tooling; read-only to the scheduling core.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AvailabilityWindow {
    pub availability_id: String,
    pub tutor_id: String,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub effective_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slot_status: WindowStatus,
}

impl AvailabilityWindow {
    /// Whether this recurring window applies on a concrete calendar date:
    /// weekday matches and the date falls in the effective range.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.day_of_week == Weekday::from(date.weekday())
            && self.effective_date <= date
            && date <= self.end_date
    }

    /// Half-open containment: `[start_time, end_time)`.
    pub fn covers(&self, time: NaiveTime) -> bool {
        self.start_time <= time && time < self.end_time
    }
}
