use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::clock::{Clock, SystemClock};
use super::dashboard::Dashboard;
use super::domain::{
    parse_date, InvalidDate, Submission, SubmissionDraft, SubmissionId, ValidationError,
};
use super::repository::{StoreError, SubmissionStore};
use super::status::{classify, classify_str, DeadlineStatus};

/// Service composing draft validation, the submission store, and the classifier.
pub struct SubmissionService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> SubmissionService<S>
where
    S: SubmissionStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub async fn dashboard(&self) -> Result<Dashboard, SubmissionServiceError> {
        self.dashboard_on(self.today()).await
    }

    /// Classify every stored submission against `today` and tally the categories.
    pub async fn dashboard_on(&self, today: NaiveDate) -> Result<Dashboard, SubmissionServiceError> {
        let submissions = self.store.list_all().await?;
        Ok(Dashboard::build(submissions, today))
    }

    pub async fn list(&self) -> Result<Vec<Submission>, SubmissionServiceError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: SubmissionId) -> Result<Submission, SubmissionServiceError> {
        Ok(self.store.get(id).await?)
    }

    /// Validate and persist a new submission, returning it with its assigned id.
    pub async fn create(
        &self,
        draft: &SubmissionDraft,
    ) -> Result<Submission, SubmissionServiceError> {
        let fields = draft.validate()?;
        let id = self.store.create(&fields).await?;
        info!(
            %id,
            product = %fields.product_name,
            deadline = %fields.deadline_date,
            "submission created"
        );
        Ok(Submission::from_fields(id, fields))
    }

    /// Replace all business fields of an existing submission.
    pub async fn update(
        &self,
        id: SubmissionId,
        draft: &SubmissionDraft,
    ) -> Result<Submission, SubmissionServiceError> {
        // A missing record is reported before any complaint about the draft.
        self.store.get(id).await?;
        let fields = draft.validate()?;
        self.store.update(id, &fields).await?;
        info!(%id, "submission updated");
        Ok(Submission::from_fields(id, fields))
    }

    pub async fn delete(&self, id: SubmissionId) -> Result<(), SubmissionServiceError> {
        self.store.delete(id).await?;
        info!(%id, "submission deleted");
        Ok(())
    }

    pub fn status_of(&self, submission: &Submission) -> DeadlineStatus {
        classify(submission.deadline_date, self.today())
    }

    /// Classify raw date strings, falling back to the service clock when `today` is absent.
    pub fn classify(
        &self,
        deadline: &str,
        today: Option<&str>,
    ) -> Result<DeadlineStatus, InvalidDate> {
        match today {
            Some(today) => classify_str(deadline, today),
            None => Ok(classify(parse_date(deadline)?, self.today())),
        }
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound(_)))
    }
}
