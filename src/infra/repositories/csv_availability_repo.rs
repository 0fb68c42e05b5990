use crate::domain::models::availability::AvailabilityWindow;
use crate::domain::ports::AvailabilityRepository;
use crate::error::AppError;
use crate::infra::repositories::csv_store::{CsvStore, AVAILABILITY_FILE};
use async_trait::async_trait;
use std::sync::Arc;

pub struct CsvAvailabilityRepo {
    store: Arc<CsvStore>,
}

impl CsvAvailabilityRepo {
    pub fn new(store: Arc<CsvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AvailabilityRepository for CsvAvailabilityRepo {
    async fn list(&self) -> Result<Vec<AvailabilityWindow>, AppError> {
        self.store.read_all(AVAILABILITY_FILE)
    }

    async fn list_by_tutor(&self, tutor_id: &str) -> Result<Vec<AvailabilityWindow>, AppError> {
        let windows: Vec<AvailabilityWindow> = self.store.read_all(AVAILABILITY_FILE)?;
        Ok(windows.into_iter().filter(|w| w.tutor_id == tutor_id).collect())
    }
}
