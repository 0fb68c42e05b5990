pub mod appointment;
pub mod availability;
pub mod course;
pub mod tutor;
pub mod user;
