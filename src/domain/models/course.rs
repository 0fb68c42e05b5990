use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only reference record, used only to stamp bookings.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
}
