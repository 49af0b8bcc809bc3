use crate::infra::{clock_for, open_store};
use chrono::NaiveDate;
use clap::Args;
use deadline_desk::config::AppConfig;
use deadline_desk::error::AppError;
use deadline_desk::submissions::{
    classify, format_date, Clock, Dashboard, SubmissionDraft, SubmissionService, SystemClock,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Deadline to classify (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) deadline: NaiveDate,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct AddArgs {
    /// Product the submission covers
    #[arg(long)]
    pub(crate) product: String,
    /// Country or region of the health authority
    #[arg(long)]
    pub(crate) country: String,
    /// Free-form submission category, e.g. "Variation Type II"
    #[arg(long)]
    pub(crate) submission_type: String,
    /// Submission deadline (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) deadline: String,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| SystemClock.today());
    let status = classify(args.deadline, today);

    println!(
        "{} (evaluated {}): {} | {} [{}]",
        format_date(args.deadline),
        format_date(today),
        status.countdown,
        status.status.label(),
        status.severity.label()
    );
    Ok(())
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = Arc::new(open_store(&config.database).await?);
    let service = SubmissionService::with_clock(store.clone(), clock_for(args.today));

    let dashboard = service.dashboard().await?;
    print!("{}", render_report(&dashboard));

    store.close().await;
    Ok(())
}

pub(crate) async fn run_add(args: AddArgs) -> Result<(), AppError> {
    let AddArgs {
        product,
        country,
        submission_type,
        deadline,
    } = args;

    let config = AppConfig::load()?;
    let store = Arc::new(open_store(&config.database).await?);
    let service = SubmissionService::new(store.clone());

    let draft = SubmissionDraft {
        product_name: product,
        country,
        submission_type,
        deadline_date: deadline,
    };
    let submission = service.create(&draft).await?;
    let status = service.status_of(&submission);
    println!(
        "Recorded submission {} for {} ({}), {}",
        submission.id, submission.product_name, submission.country, status.countdown
    );

    store.close().await;
    Ok(())
}

pub(crate) fn render_report(dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let mut out = format!(
        "Regulatory submission deadlines (as of {})\nTotal {} | Upcoming {} | Due Soon {} | Overdue {}\n",
        format_date(dashboard.today),
        summary.total,
        summary.upcoming,
        summary.due_soon,
        summary.overdue
    );

    if dashboard.entries.is_empty() {
        out.push_str("\nNo submissions tracked yet.\n");
        return out;
    }

    out.push('\n');
    for entry in &dashboard.entries {
        let submission = &entry.submission;
        out.push_str(&format!(
            "- #{} {} | {} | {} | due {} | {} [{}]\n",
            submission.id,
            submission.product_name,
            submission.country,
            submission.submission_type,
            format_date(submission.deadline_date),
            entry.status.countdown,
            entry.status.status.label()
        ));
    }
    out
}
