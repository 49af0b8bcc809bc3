//! Regulatory submission deadline tracking.
//!
//! Submissions are stored behind the [`submissions::SubmissionStore`] trait and every
//! deadline is classified against an injected "today" before it reaches a page or API
//! response.

pub mod config;
pub mod error;
pub mod submissions;
pub mod telemetry;
