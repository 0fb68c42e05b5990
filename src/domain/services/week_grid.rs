use crate::domain::models::appointment::Appointment;
use crate::domain::models::availability::{AvailabilityWindow, WindowStatus};
use crate::domain::models::tutor::Tutor;
use crate::domain::services::availability::windows_for;
use crate::domain::services::slots::{classify_slot, SlotStatus};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Display-ready materialization of slot statuses across tutors, dates,
/// and hours. Plain data, consumed by reporting/UI layers.
#[derive(Debug, Serialize, Clone)]
pub struct WeekGrid {
    pub tutors: Vec<TutorWeek>,
    pub dates: Vec<String>,
    pub hours: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct TutorWeek {
    pub tutor_id: String,
    pub tutor_name: String,
    /// date string -> hour string -> status. Dates with no available
    /// window are omitted rather than filled with `unavailable`.
    pub slots: BTreeMap<String, BTreeMap<String, SlotStatus>>,
    pub available_days: Vec<String>,
}

/// Walks `date` backward to the most recent `anchor` weekday (no-op if
/// it already falls on it).
pub fn normalize_to_week_start(date: NaiveDate, anchor: chrono::Weekday) -> NaiveDate {
    let mut day = date;
    while day.weekday() != anchor {
        day -= Duration::days(1);
    }
    day
}

/// Composes the resolver and slot evaluator across the given dates and
/// display hours. Pure read/compose; no mutation.
///
/// Omission policy: a tutor/date pair with no available window is left
/// out of `slots`; a tutor with zero available days across the whole
/// window is left out of `tutors` entirely.
pub fn assemble_week(
    tutors: &[Tutor],
    windows: &[AvailabilityWindow],
    appointments: &[Appointment],
    dates: &[NaiveDate],
    hours: &[u32],
) -> WeekGrid {
    let date_strings: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let hour_strings: Vec<String> = hours.iter().map(|h| format!("{:02}:00", h)).collect();

    let mut grid_tutors = Vec::new();

    for tutor in tutors {
        let mut slots: BTreeMap<String, BTreeMap<String, SlotStatus>> = BTreeMap::new();
        let mut available_days = Vec::new();

        for date in dates {
            let day_windows = windows_for(windows, &tutor.tutor_id, *date);
            let has_open_window = day_windows
                .iter()
                .any(|w| w.slot_status == WindowStatus::Available);
            if !has_open_window {
                continue;
            }

            let day_appointments: Vec<Appointment> = appointments
                .iter()
                .filter(|a| a.tutor_id == tutor.tutor_id && a.appointment_date == *date)
                .cloned()
                .collect();

            let mut day_slots = BTreeMap::new();
            for (hour, label) in hours.iter().zip(&hour_strings) {
                let time = NaiveTime::from_hms_opt(*hour, 0, 0)
                    .unwrap_or(NaiveTime::MIN);
                day_slots.insert(label.clone(), classify_slot(&day_windows, &day_appointments, time));
            }

            let date_string = date.format("%Y-%m-%d").to_string();
            slots.insert(date_string.clone(), day_slots);
            available_days.push(date_string);
        }

        if slots.is_empty() {
            continue;
        }

        grid_tutors.push(TutorWeek {
            tutor_id: tutor.tutor_id.clone(),
            tutor_name: tutor.display_name.clone(),
            slots,
            available_days,
        });
    }

    WeekGrid {
        tutors: grid_tutors,
        dates: date_strings,
        hours: hour_strings,
    }
}
