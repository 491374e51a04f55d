// src/presentation/http/middleware/error_handler.rs
use crate::application::{
    error::{ApplicationError, OperationalError},
    ports::{
        error_log::{ErrorLog, ServerErrorEntry},
        time::Clock,
    },
};
use crate::presentation::http::error::{PendingError, render_error, resolve_status};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Terminal error consumer: resolves status and message, logs server
/// failures, and writes the JSON envelope. Never fails itself.
#[derive(Clone)]
pub struct ErrorHandler {
    development_mode: bool,
    log: Arc<dyn ErrorLog>,
    clock: Arc<dyn Clock>,
}

impl ErrorHandler {
    pub fn new(development_mode: bool, log: Arc<dyn ErrorLog>, clock: Arc<dyn Clock>) -> Self {
        Self {
            development_mode,
            log,
            clock,
        }
    }

    pub fn development_mode(&self) -> bool {
        self.development_mode
    }

    pub fn respond(&self, err: &ApplicationError) -> Response {
        let status = resolve_status(err);
        if status.is_server_error() {
            self.log.record(&ServerErrorEntry {
                timestamp: self.clock.now(),
                status: status.as_u16(),
                error: err.stack(),
            });
        }
        render_error(err, self.development_mode)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Layer function: replaces any response carrying a pending error with the
/// normalized envelope. Bare 4xx/5xx responses produced by the router itself
/// (405, 413, ...) are wrapped as operational errors with the canonical reason.
///
/// Install with `axum::middleware::from_fn_with_state(handler, normalize_errors)`.
pub async fn normalize_errors(
    State(handler): State<ErrorHandler>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if let Some(PendingError(err)) = response.extensions_mut().remove::<PendingError>() {
        return handler.respond(&err);
    }

    let status = response.status();
    if (status.is_client_error() || status.is_server_error()) && !is_json(response.headers()) {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let err = ApplicationError::from(OperationalError::new(status.as_u16(), reason));
        let mut normalized = handler.respond(&err);
        // Keep `Allow` and friends from the original 405.
        if let Some(allow) = response.headers_mut().remove(header::ALLOW) {
            normalized.headers_mut().insert(header::ALLOW, allow);
        }
        return normalized;
    }

    response
}
