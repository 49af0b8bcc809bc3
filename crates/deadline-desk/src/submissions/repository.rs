use async_trait::async_trait;

use super::domain::{InvalidDate, Submission, SubmissionFields, SubmissionId};

/// Persistence contract for submissions. Implementations serialize their own writes.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Every submission, ascending by deadline and then by id.
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError>;
    async fn get(&self, id: SubmissionId) -> Result<Submission, StoreError>;
    async fn create(&self, fields: &SubmissionFields) -> Result<SubmissionId, StoreError>;
    async fn update(&self, id: SubmissionId, fields: &SubmissionFields) -> Result<(), StoreError>;
    async fn delete(&self, id: SubmissionId) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("submission {0} not found")]
    NotFound(SubmissionId),
    #[error("submission {id} has an unreadable deadline: {source}")]
    CorruptDeadline {
        id: SubmissionId,
        #[source]
        source: InvalidDate,
    },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
