use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only reference record. Tutors are created by an external admin
/// workflow and never mutated by the scheduling core.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Tutor {
    pub tutor_id: String,
    pub display_name: String,
}
