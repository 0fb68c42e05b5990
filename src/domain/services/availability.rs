use crate::domain::models::availability::AvailabilityWindow;
use chrono::NaiveDate;

/// Recurring-availability resolution: out of a tutor's windows, the ones
/// whose weekday matches `date` and whose effective range contains it.
///
/// An empty result is the normal "tutor does not work this day" case,
/// not an error. Order is unspecified; callers must handle zero, one, or
/// multiple matches (overlapping windows are not de-duplicated).
pub fn windows_for(
    windows: &[AvailabilityWindow],
    tutor_id: &str,
    date: NaiveDate,
) -> Vec<AvailabilityWindow> {
    windows
        .iter()
        .filter(|w| w.tutor_id == tutor_id && w.applies_on(date))
        .cloned()
        .collect()
}
