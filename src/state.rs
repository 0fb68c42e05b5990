use crate::config::Config;
use crate::domain::ports::{
    AppointmentRepository, AvailabilityRepository, CourseRepository, TutorRepository,
    UserDirectory,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tutor_repo: Arc<dyn TutorRepository>,
    pub course_repo: Arc<dyn CourseRepository>,
    pub availability_repo: Arc<dyn AvailabilityRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub user_directory: Arc<dyn UserDirectory>,
}
