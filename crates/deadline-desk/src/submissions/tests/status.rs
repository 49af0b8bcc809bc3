use super::common::*;
use crate::submissions::domain::{format_date, parse_date, InvalidDate};
use crate::submissions::status::{classify, classify_str, Severity, StatusCategory};

#[test]
fn classification_follows_day_offsets() {
    for offset in -60..=60 {
        let status = classify(days_from_today(offset), today());
        assert_eq!(status.days_remaining, offset);

        match offset {
            d if d < 0 => {
                assert_eq!(status.status, StatusCategory::Overdue, "offset {d}");
                assert_eq!(status.severity, Severity::Danger, "offset {d}");
                assert!(status.countdown.starts_with("Overdue by "), "offset {d}");
            }
            0 => {
                assert_eq!(status.countdown, "Due Today");
                assert_eq!(status.status, StatusCategory::DueSoon);
                assert_eq!(status.severity, Severity::Warning);
            }
            1 => {
                assert_eq!(status.countdown, "Due Tomorrow");
                assert_eq!(status.status, StatusCategory::DueSoon);
                assert_eq!(status.severity, Severity::Warning);
            }
            d if d <= 14 => {
                assert_eq!(status.countdown, format!("Due in {d} days"));
                assert_eq!(status.status, StatusCategory::DueSoon, "offset {d}");
                assert_eq!(status.severity, Severity::Warning, "offset {d}");
            }
            d => {
                assert_eq!(status.countdown, format!("Due in {d} days"));
                assert_eq!(status.status, StatusCategory::Upcoming, "offset {d}");
                assert_eq!(status.severity, Severity::Success, "offset {d}");
            }
        }
    }
}

#[test]
fn overdue_countdown_pluralizes_days() {
    assert_eq!(
        classify(days_from_today(-1), today()).countdown,
        "Overdue by 1 day"
    );
    assert_eq!(
        classify(days_from_today(-2), today()).countdown,
        "Overdue by 2 days"
    );
}

#[test]
fn window_boundary_sits_at_fourteen_days() {
    assert_eq!(
        classify(days_from_today(14), today()).status,
        StatusCategory::DueSoon
    );
    assert_eq!(
        classify(days_from_today(15), today()).status,
        StatusCategory::Upcoming
    );
}

#[test]
fn string_boundary_classifies_iso_dates() {
    let status = classify_str("2025-06-18", "2025-06-15").expect("valid dates");
    assert_eq!(status.countdown, "Due in 3 days");
    assert_eq!(status.status.label(), "Due Soon");
    assert_eq!(status.severity.label(), "warning");
}

#[test]
fn string_boundary_rejects_malformed_dates() {
    assert_eq!(
        classify_str("2025-02-30", "2025-02-01"),
        Err(InvalidDate {
            value: "2025-02-30".to_string()
        })
    );
    assert_eq!(
        classify_str("2025-06-18", "June 15"),
        Err(InvalidDate {
            value: "June 15".to_string()
        })
    );
}

#[test]
fn dates_outside_four_digit_years_are_rejected() {
    for raw in ["+10000-01-01", "-0002-01-01", "0000-01-01", "2025-6-5", "20250615"] {
        assert_eq!(
            parse_date(raw),
            Err(InvalidDate {
                value: raw.to_string()
            }),
            "{raw} should be refused"
        );
    }
    assert_eq!(
        parse_date(" 2025-06-15 ").map(format_date),
        Ok("2025-06-15".to_string())
    );
}

#[test]
fn labels_serialize_as_displayed() {
    let status = classify(days_from_today(3), today());
    let payload = serde_json::to_value(&status).expect("serializes");
    assert_eq!(payload["status"], "Due Soon");
    assert_eq!(payload["severity"], "warning");
    assert_eq!(payload["days_remaining"], 3);
}
