//! Submission records, deadline classification, and the dashboard built from them.

pub mod clock;
pub mod dashboard;
pub mod domain;
pub mod memory;
pub mod pages;
pub mod repository;
pub mod router;
pub mod service;
pub mod sqlite;
pub mod status;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{Dashboard, DashboardEntry, DashboardSummary};
pub use domain::{
    format_date, parse_date, InvalidDate, Submission, SubmissionDraft, SubmissionField,
    SubmissionFields, SubmissionId, ValidationError, DATE_FORMAT,
};
pub use memory::InMemorySubmissionStore;
pub use repository::{StoreError, SubmissionStore};
pub use router::{submission_router, SubmissionDetail};
pub use service::{SubmissionService, SubmissionServiceError};
pub use sqlite::SqliteSubmissionStore;
pub use status::{
    classify, classify_str, DeadlineStatus, Severity, StatusCategory, DUE_SOON_WINDOW_DAYS,
};
