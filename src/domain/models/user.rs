use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Directory entry used to resolve a student's display name from their
/// email when a booking omits the name.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub email: String,
    pub display_name: String,
}
