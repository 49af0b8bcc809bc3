use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::domain::{Submission, SubmissionFields, SubmissionId};
use super::repository::{StoreError, SubmissionStore};

/// Process-local store for tests and throwaway `--ephemeral` runs.
#[derive(Debug, Default, Clone)]
pub struct InMemorySubmissionStore {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    records: BTreeMap<SubmissionId, Submission>,
}

impl InMemorySubmissionStore {
    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let guard = self.lock()?;
        let mut submissions: Vec<Submission> = guard.records.values().cloned().collect();
        submissions.sort_by_key(|submission| (submission.deadline_date, submission.id));
        Ok(submissions)
    }

    async fn get(&self, id: SubmissionId) -> Result<Submission, StoreError> {
        let guard = self.lock()?;
        guard
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, fields: &SubmissionFields) -> Result<SubmissionId, StoreError> {
        let mut guard = self.lock()?;
        guard.last_id += 1;
        let id = SubmissionId(guard.last_id);
        guard
            .records
            .insert(id, Submission::from_fields(id, fields.clone()));
        Ok(id)
    }

    async fn update(&self, id: SubmissionId, fields: &SubmissionFields) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        match guard.records.get_mut(&id) {
            Some(record) => {
                *record = Submission::from_fields(id, fields.clone());
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: SubmissionId) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        guard
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
