use crate::domain::models::tutor::Tutor;
use crate::domain::ports::TutorRepository;
use crate::error::AppError;
use crate::infra::repositories::csv_store::{CsvStore, TUTORS_FILE};
use async_trait::async_trait;
use std::sync::Arc;

pub struct CsvTutorRepo {
    store: Arc<CsvStore>,
}

impl CsvTutorRepo {
    pub fn new(store: Arc<CsvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TutorRepository for CsvTutorRepo {
    async fn list(&self) -> Result<Vec<Tutor>, AppError> {
        self.store.read_all(TUTORS_FILE)
    }

    async fn find_by_id(&self, tutor_id: &str) -> Result<Option<Tutor>, AppError> {
        let tutors: Vec<Tutor> = self.store.read_all(TUTORS_FILE)?;
        Ok(tutors.into_iter().find(|t| t.tutor_id == tutor_id))
    }
}
