use crate::domain::models::appointment::{Appointment, ConfirmationStatus};
use crate::domain::models::availability::{AvailabilityWindow, WindowStatus};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Pending,
    Unavailable,
}

/// Classifies one (tutor, date, time) slot given the windows that apply
/// on the date (resolver output) and that day's appointments for the
/// tutor.
///
/// Any applicable window marked available whose `[start, end)` range
/// contains `time` makes the slot available; overlapping windows marked
/// unavailable do not veto it. This mirrors the reference behavior and
/// keeps the predicate order-independent.
pub fn classify_slot(
    windows: &[AvailabilityWindow],
    appointments: &[Appointment],
    time: NaiveTime,
) -> SlotStatus {
    if windows.is_empty() {
        return SlotStatus::Unavailable;
    }

    let in_open_window = windows
        .iter()
        .any(|w| w.slot_status == WindowStatus::Available && w.covers(time));

    if !in_open_window {
        return SlotStatus::Unavailable;
    }

    if let Some(occupant) = appointments
        .iter()
        .find(|a| a.status.blocks_slot() && a.contains(time))
    {
        return if occupant.confirmation_status == ConfirmationStatus::Pending {
            SlotStatus::Pending
        } else {
            SlotStatus::Booked
        };
    }

    SlotStatus::Available
}
