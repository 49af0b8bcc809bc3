use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{parse_date, Submission, SubmissionDraft, SubmissionId};
use super::pages::{dashboard_page, message_page, submission_form_page, FormMode};
use super::repository::{StoreError, SubmissionStore};
use super::service::{SubmissionService, SubmissionServiceError};
use super::status::DeadlineStatus;

type SharedService<S> = Arc<SubmissionService<S>>;

/// Router exposing the HTML dashboard, its form actions, and the JSON API.
pub fn submission_router<S>(service: SharedService<S>) -> Router
where
    S: SubmissionStore + 'static,
{
    Router::new()
        .route("/", get(dashboard_handler::<S>))
        .route(
            "/add",
            get(new_submission_form).post(create_submission_action::<S>),
        )
        .route(
            "/edit/:id",
            get(edit_submission_form::<S>).post(update_submission_action::<S>),
        )
        .route(
            "/delete/:id",
            get(delete_submission_action::<S>).post(delete_submission_action::<S>),
        )
        .route("/api/v1/dashboard", get(dashboard_api::<S>))
        .route(
            "/api/v1/submissions",
            get(list_submissions_api::<S>).post(create_submission_api::<S>),
        )
        .route(
            "/api/v1/submissions/:id",
            get(get_submission_api::<S>)
                .put(update_submission_api::<S>)
                .delete(delete_submission_api::<S>),
        )
        .route("/api/v1/classify", get(classify_api::<S>))
        .with_state(service)
}

pub(crate) fn error_status(error: &SubmissionServiceError) -> StatusCode {
    match error {
        SubmissionServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionServiceError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        SubmissionServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, Json(payload)).into_response()
}

fn api_service_error(error: SubmissionServiceError) -> Response {
    let status = error_status(&error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(%error, "submission request failed");
    }
    api_error(status, error.to_string())
}

fn page_service_error(error: SubmissionServiceError) -> Response {
    let status = error_status(&error);
    let title = if status == StatusCode::NOT_FOUND {
        "Submission not found"
    } else {
        error!(%error, "submission page failed");
        "Something went wrong"
    };
    (status, Html(message_page(title, &error.to_string()))).into_response()
}

pub(crate) async fn dashboard_handler<S>(State(service): State<SharedService<S>>) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.dashboard().await {
        Ok(dashboard) => Html(dashboard_page(&dashboard)).into_response(),
        Err(other) => page_service_error(other),
    }
}

pub(crate) async fn new_submission_form() -> Html<String> {
    Html(submission_form_page(
        FormMode::Create,
        &SubmissionDraft::default(),
        None,
    ))
}

pub(crate) async fn create_submission_action<S>(
    State(service): State<SharedService<S>>,
    Form(draft): Form<SubmissionDraft>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.create(&draft).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(SubmissionServiceError::Validation(invalid)) => {
            let message = invalid.to_string();
            let page = submission_form_page(FormMode::Create, &draft, Some(&message));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
        Err(other) => page_service_error(other),
    }
}

pub(crate) async fn edit_submission_form<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    let id = SubmissionId(id);
    match service.get(id).await {
        Ok(submission) => {
            let draft = SubmissionDraft::from(&submission);
            Html(submission_form_page(FormMode::Edit(id), &draft, None)).into_response()
        }
        Err(other) => page_service_error(other),
    }
}

pub(crate) async fn update_submission_action<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
    Form(draft): Form<SubmissionDraft>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    let id = SubmissionId(id);
    match service.update(id, &draft).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(SubmissionServiceError::Validation(invalid)) => {
            let message = invalid.to_string();
            let page = submission_form_page(FormMode::Edit(id), &draft, Some(&message));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
        Err(other) => page_service_error(other),
    }
}

/// Deleting an id that is already gone still lands back on the dashboard.
pub(crate) async fn delete_submission_action<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    let id = SubmissionId(id);
    match service.delete(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(missing) if missing.is_not_found() => {
            warn!(%id, "delete requested for missing submission");
            Redirect::to("/").into_response()
        }
        Err(other) => page_service_error(other),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) today: Option<String>,
}

pub(crate) async fn dashboard_api<S>(
    State(service): State<SharedService<S>>,
    Query(query): Query<DashboardQuery>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    let today = match query.today.as_deref().map(parse_date).transpose() {
        Ok(today) => today.unwrap_or_else(|| service.today()),
        Err(invalid) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, invalid.to_string()),
    };

    match service.dashboard_on(today).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(other) => api_service_error(other),
    }
}

pub(crate) async fn list_submissions_api<S>(State(service): State<SharedService<S>>) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.list().await {
        Ok(submissions) => Json(submissions).into_response(),
        Err(other) => api_service_error(other),
    }
}

pub(crate) async fn create_submission_api<S>(
    State(service): State<SharedService<S>>,
    Json(draft): Json<SubmissionDraft>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.create(&draft).await {
        Ok(submission) => (StatusCode::CREATED, Json(submission)).into_response(),
        Err(other) => api_service_error(other),
    }
}

/// A single submission together with how urgent it is today.
#[derive(Debug, Serialize)]
pub struct SubmissionDetail {
    #[serde(flatten)]
    pub submission: Submission,
    pub classification: DeadlineStatus,
}

pub(crate) async fn get_submission_api<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.get(SubmissionId(id)).await {
        Ok(submission) => {
            let classification = service.status_of(&submission);
            Json(SubmissionDetail {
                submission,
                classification,
            })
            .into_response()
        }
        Err(other) => api_service_error(other),
    }
}

pub(crate) async fn update_submission_api<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
    Json(draft): Json<SubmissionDraft>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.update(SubmissionId(id), &draft).await {
        Ok(submission) => Json(submission).into_response(),
        Err(other) => api_service_error(other),
    }
}

pub(crate) async fn delete_submission_api<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.delete(SubmissionId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(other) => api_service_error(other),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyQuery {
    pub(crate) deadline: String,
    #[serde(default)]
    pub(crate) today: Option<String>,
}

pub(crate) async fn classify_api<S>(
    State(service): State<SharedService<S>>,
    Query(query): Query<ClassifyQuery>,
) -> Response
where
    S: SubmissionStore + 'static,
{
    match service.classify(&query.deadline, query.today.as_deref()) {
        Ok(status) => Json(status).into_response(),
        Err(invalid) => api_error(StatusCode::UNPROCESSABLE_ENTITY, invalid.to_string()),
    }
}
