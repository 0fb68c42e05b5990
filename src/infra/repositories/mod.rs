pub mod csv_store;

pub mod csv_appointment_repo;
pub mod csv_availability_repo;
pub mod csv_course_repo;
pub mod csv_tutor_repo;
pub mod csv_user_repo;

pub mod sqlite_appointment_repo;
pub mod sqlite_availability_repo;
pub mod sqlite_course_repo;
pub mod sqlite_tutor_repo;
pub mod sqlite_user_repo;
