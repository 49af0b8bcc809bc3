use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{parse_date, InvalidDate};

/// Deadlines this many days out (or fewer) are "Due Soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Upcoming,
    #[serde(rename = "Due Soon")]
    DueSoon,
    Overdue,
}

impl StatusCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::DueSoon => "Due Soon",
            Self::Overdue => "Overdue",
        }
    }
}

/// Presentation urgency, named after the badge classes the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub countdown: String,
    pub status: StatusCategory,
    pub severity: Severity,
    /// Signed whole days until the deadline; negative once it has passed.
    pub days_remaining: i64,
}

pub fn classify(deadline: NaiveDate, today: NaiveDate) -> DeadlineStatus {
    let diff = deadline.signed_duration_since(today).num_days();

    let (countdown, status, severity) = if diff < 0 {
        let overdue = -diff;
        let plural = if overdue == 1 { "" } else { "s" };
        (
            format!("Overdue by {overdue} day{plural}"),
            StatusCategory::Overdue,
            Severity::Danger,
        )
    } else if diff == 0 {
        ("Due Today".to_string(), StatusCategory::DueSoon, Severity::Warning)
    } else if diff == 1 {
        (
            "Due Tomorrow".to_string(),
            StatusCategory::DueSoon,
            Severity::Warning,
        )
    } else if diff <= DUE_SOON_WINDOW_DAYS {
        (
            format!("Due in {diff} days"),
            StatusCategory::DueSoon,
            Severity::Warning,
        )
    } else {
        (
            format!("Due in {diff} days"),
            StatusCategory::Upcoming,
            Severity::Success,
        )
    };

    DeadlineStatus {
        countdown,
        status,
        severity,
        days_remaining: diff,
    }
}

/// String boundary over [`classify`]; both dates must be `YYYY-MM-DD`.
pub fn classify_str(deadline: &str, today: &str) -> Result<DeadlineStatus, InvalidDate> {
    let deadline = parse_date(deadline)?;
    let today = parse_date(today)?;
    Ok(classify(deadline, today))
}
