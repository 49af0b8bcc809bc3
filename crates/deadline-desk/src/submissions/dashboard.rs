use chrono::NaiveDate;
use serde::Serialize;

use super::domain::Submission;
use super::status::{classify, DeadlineStatus, StatusCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub upcoming: usize,
    pub due_soon: usize,
    pub overdue: usize,
}

impl DashboardSummary {
    fn record(&mut self, status: StatusCategory) {
        self.total += 1;
        match status {
            StatusCategory::Upcoming => self.upcoming += 1,
            StatusCategory::DueSoon => self.due_soon += 1,
            StatusCategory::Overdue => self.overdue += 1,
        }
    }
}

/// A stored submission paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardEntry {
    #[serde(flatten)]
    pub submission: Submission,
    #[serde(flatten)]
    pub status: DeadlineStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub summary: DashboardSummary,
    pub entries: Vec<DashboardEntry>,
}

impl Dashboard {
    /// Classify `submissions` against `today`, keeping the order they arrive in.
    pub fn build(submissions: Vec<Submission>, today: NaiveDate) -> Self {
        let mut summary = DashboardSummary::default();
        let entries = submissions
            .into_iter()
            .map(|submission| {
                let status = classify(submission.deadline_date, today);
                summary.record(status.status);
                DashboardEntry { submission, status }
            })
            .collect();

        Self {
            today,
            summary,
            entries,
        }
    }
}
