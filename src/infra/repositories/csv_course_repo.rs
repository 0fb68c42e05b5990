use crate::domain::models::course::Course;
use crate::domain::ports::CourseRepository;
use crate::error::AppError;
use crate::infra::repositories::csv_store::{CsvStore, COURSES_FILE};
use async_trait::async_trait;
use std::sync::Arc;

pub struct CsvCourseRepo {
    store: Arc<CsvStore>,
}

impl CsvCourseRepo {
    pub fn new(store: Arc<CsvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseRepository for CsvCourseRepo {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        self.store.read_all(COURSES_FILE)
    }

    async fn find_by_id(&self, course_id: &str) -> Result<Option<Course>, AppError> {
        let courses: Vec<Course> = self.store.read_all(COURSES_FILE)?;
        Ok(courses.into_iter().find(|c| c.course_id == course_id))
    }
}
