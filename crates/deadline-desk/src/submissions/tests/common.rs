use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::submissions::clock::FixedClock;
use crate::submissions::domain::{
    format_date, Submission, SubmissionDraft, SubmissionFields, SubmissionId,
};
use crate::submissions::memory::InMemorySubmissionStore;
use crate::submissions::repository::{StoreError, SubmissionStore};
use crate::submissions::{submission_router, SubmissionService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn days_from_today(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

pub(super) fn draft(product: &str, deadline: NaiveDate) -> SubmissionDraft {
    SubmissionDraft {
        product_name: product.to_string(),
        country: "Germany".to_string(),
        submission_type: "Variation Type II".to_string(),
        deadline_date: format_date(deadline),
    }
}

pub(super) fn build_service() -> (
    SubmissionService<InMemorySubmissionStore>,
    Arc<InMemorySubmissionStore>,
) {
    let store = Arc::new(InMemorySubmissionStore::default());
    let service = SubmissionService::with_clock(store.clone(), Arc::new(FixedClock(today())));
    (service, store)
}

pub(super) fn router_with_service(
    service: SubmissionService<InMemorySubmissionStore>,
) -> axum::Router {
    submission_router(Arc::new(service))
}

pub(super) struct UnavailableStore;

#[async_trait]
impl SubmissionStore for UnavailableStore {
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn get(&self, _id: SubmissionId) -> Result<Submission, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn create(&self, _fields: &SubmissionFields) -> Result<SubmissionId, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn update(
        &self,
        _id: SubmissionId,
        _fields: &SubmissionFields,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn delete(&self, _id: SubmissionId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
