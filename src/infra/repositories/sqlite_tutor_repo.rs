use crate::domain::models::tutor::Tutor;
use crate::domain::ports::TutorRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTutorRepo {
    pool: SqlitePool,
}

impl SqliteTutorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorRepository for SqliteTutorRepo {
    async fn list(&self) -> Result<Vec<Tutor>, AppError> {
        sqlx::query_as::<_, Tutor>("SELECT * FROM tutors ORDER BY tutor_id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tutor_id: &str) -> Result<Option<Tutor>, AppError> {
        sqlx::query_as::<_, Tutor>("SELECT * FROM tutors WHERE tutor_id = ?")
            .bind(tutor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
