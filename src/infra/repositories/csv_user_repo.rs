use crate::domain::models::user::User;
use crate::domain::ports::UserDirectory;
use crate::error::AppError;
use crate::infra::repositories::csv_store::{CsvStore, USERS_FILE};
use async_trait::async_trait;
use std::sync::Arc;

pub struct CsvUserRepo {
    store: Arc<CsvStore>,
}

impl CsvUserRepo {
    pub fn new(store: Arc<CsvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserDirectory for CsvUserRepo {
    async fn resolve_name_by_email(&self, email: &str) -> Result<Option<String>, AppError> {
        let users: Vec<User> = self.store.read_all(USERS_FILE)?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.display_name))
    }
}
