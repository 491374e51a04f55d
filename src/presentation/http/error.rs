use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ErrorDetail},
};
use axum::{
    Json,
    extract::rejection::{ExtensionRejection, JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug)]
pub struct HttpError {
    inner: ApplicationError,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        Self { inner: err }
    }
}

/// Status line for an error. Values outside 100..=599 fall back to 500.
pub fn resolve_status(err: &ApplicationError) -> StatusCode {
    match err.status_code() {
        code @ 100..=599 => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error stashed on a response for the normalizing layer to pick up.
#[derive(Clone)]
pub(crate) struct PendingError(pub(crate) Arc<ApplicationError>);

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [ErrorDetail]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

/// Builds the `{ status, message, errors?, stack? }` envelope.
pub fn render_error(err: &ApplicationError, include_stack: bool) -> Response {
    let details = err.details();
    let payload = ErrorBody {
        status: "error",
        message: err.message(),
        errors: (!details.is_empty()).then_some(details),
        stack: include_stack.then(|| err.stack()),
    };
    (resolve_status(err), Json(payload)).into_response()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // Production-safe rendering; `normalize_errors` replaces it when installed.
        let mut response = render_error(&self.inner, false);
        response
            .extensions_mut()
            .insert(PendingError(Arc::new(self.inner)));
        response
    }
}

impl From<ApplicationError> for HttpError {
    fn from(value: ApplicationError) -> Self {
        Self::from_error(value)
    }
}

impl From<JsonRejection> for HttpError {
    #[track_caller]
    fn from(value: JsonRejection) -> Self {
        Self::from_error(ApplicationError::bad_request(value.body_text()))
    }
}

impl From<PathRejection> for HttpError {
    #[track_caller]
    fn from(value: PathRejection) -> Self {
        Self::from_error(ApplicationError::bad_request(value.body_text()))
    }
}

impl From<ExtensionRejection> for HttpError {
    #[track_caller]
    fn from(_: ExtensionRejection) -> Self {
        Self::from_error(ApplicationError::infrastructure("application state missing"))
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
