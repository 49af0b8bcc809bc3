use chrono::NaiveDate;
use deadline_desk::config::DatabaseConfig;
use deadline_desk::error::AppError;
use deadline_desk::submissions::{Clock, FixedClock, SqliteSubmissionStore, SystemClock};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    deadline_desk::submissions::parse_date(raw).map_err(|err| err.to_string())
}

/// Pin "today" when a caller supplies one, otherwise follow the host calendar.
pub(crate) fn clock_for(today: Option<NaiveDate>) -> Arc<dyn Clock> {
    match today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    }
}

pub(crate) async fn open_store(config: &DatabaseConfig) -> Result<SqliteSubmissionStore, AppError> {
    let store = SqliteSubmissionStore::connect(&config.url, config.max_connections).await?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_offending_value() {
        let error = parse_date("2025-02-29").expect_err("2025 is not a leap year");
        assert!(error.contains("2025-02-29"));
        assert_eq!(
            parse_date(" 2024-02-29 ").expect("leap day"),
            NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date")
        );
    }

    #[test]
    fn clock_for_pins_supplied_dates() {
        let pinned = NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date");
        assert_eq!(clock_for(Some(pinned)).today(), pinned);
    }
}
