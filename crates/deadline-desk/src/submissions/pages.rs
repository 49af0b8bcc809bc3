//! Server-rendered HTML for the dashboard and the add/edit form.

use super::dashboard::{Dashboard, DashboardEntry};
use super::domain::{format_date, SubmissionDraft, SubmissionId};

/// Which action the shared submission form posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(SubmissionId),
}

impl FormMode {
    fn action(self) -> String {
        match self {
            Self::Create => "/add".to_string(),
            Self::Edit(id) => format!("/edit/{id}"),
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Create => "Add Submission",
            Self::Edit(_) => "Edit Submission",
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title>\
<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\
</head><body class=\"bg-light\"><main class=\"container py-4\">{body}</main></body></html>",
        title = escape_html(title),
    )
}

fn summary_card(label: &str, count: usize, tone: &str) -> String {
    format!(
        "<div class=\"col\"><div class=\"card border-{tone}\"><div class=\"card-body\">\
<div class=\"text-muted small\">{label}</div><div class=\"fs-3 fw-bold\">{count}</div>\
</div></div></div>"
    )
}

fn entry_row(entry: &DashboardEntry) -> String {
    let submission = &entry.submission;
    let id = submission.id;
    format!(
        "<tr><td>{product}</td><td>{country}</td><td>{kind}</td><td>{deadline}</td>\
<td>{countdown}</td><td><span class=\"badge bg-{severity}\">{status}</span></td>\
<td><a class=\"btn btn-sm btn-outline-primary\" href=\"/edit/{id}\">Edit</a> \
<form class=\"d-inline\" method=\"post\" action=\"/delete/{id}\">\
<button class=\"btn btn-sm btn-outline-danger\" type=\"submit\">Delete</button></form></td></tr>",
        product = escape_html(&submission.product_name),
        country = escape_html(&submission.country),
        kind = escape_html(&submission.submission_type),
        deadline = format_date(submission.deadline_date),
        countdown = escape_html(&entry.status.countdown),
        severity = entry.status.severity.label(),
        status = entry.status.status.label(),
    )
}

pub fn dashboard_page(dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let cards = [
        summary_card("Total", summary.total, "primary"),
        summary_card("Upcoming", summary.upcoming, "success"),
        summary_card("Due Soon", summary.due_soon, "warning"),
        summary_card("Overdue", summary.overdue, "danger"),
    ]
    .concat();

    let table = if dashboard.entries.is_empty() {
        "<p class=\"text-muted\">No submissions tracked yet.</p>".to_string()
    } else {
        let rows: String = dashboard.entries.iter().map(entry_row).collect();
        format!(
            "<table class=\"table table-striped align-middle\"><thead><tr>\
<th>Product</th><th>Country</th><th>Submission Type</th><th>Deadline</th>\
<th>Countdown</th><th>Status</th><th>Actions</th></tr></thead><tbody>{rows}</tbody></table>"
        )
    };

    let body = format!(
        "<div class=\"d-flex justify-content-between align-items-center mb-3\">\
<h1 class=\"h3\">Regulatory Submission Deadlines</h1>\
<a class=\"btn btn-primary\" href=\"/add\">Add Submission</a></div>\
<p class=\"text-muted\">As of {today}</p>\
<div class=\"row row-cols-4 g-3 mb-4\">{cards}</div>{table}",
        today = format_date(dashboard.today),
    );

    layout("Regulatory Dashboard", &body)
}

fn text_input(name: &str, label: &str, value: &str, kind: &str) -> String {
    format!(
        "<div class=\"mb-3\"><label class=\"form-label\" for=\"{name}\">{label}</label>\
<input class=\"form-control\" type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\" required></div>",
        value = escape_html(value),
    )
}

/// The add/edit form, optionally carrying an error message from a rejected post.
pub fn submission_form_page(
    mode: FormMode,
    draft: &SubmissionDraft,
    error: Option<&str>,
) -> String {
    let alert = error
        .map(|message| {
            format!(
                "<div class=\"alert alert-danger\" role=\"alert\">{}</div>",
                escape_html(message)
            )
        })
        .unwrap_or_default();

    let fields = [
        text_input("product_name", "Product Name", &draft.product_name, "text"),
        text_input("country", "Country", &draft.country, "text"),
        text_input(
            "submission_type",
            "Submission Type",
            &draft.submission_type,
            "text",
        ),
        text_input("deadline_date", "Deadline Date", &draft.deadline_date, "date"),
    ]
    .concat();

    let body = format!(
        "<h1 class=\"h3 mb-3\">{title}</h1>{alert}\
<form method=\"post\" action=\"{action}\">{fields}\
<button class=\"btn btn-primary\" type=\"submit\">Save</button> \
<a class=\"btn btn-link\" href=\"/\">Cancel</a></form>",
        title = mode.title(),
        action = mode.action(),
    );

    layout(mode.title(), &body)
}

pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1 class=\"h3\">{title}</h1><p>{message}</p><a href=\"/\">Back to dashboard</a>",
        title = escape_html(title),
        message = escape_html(message),
    );
    layout(title, &body)
}
