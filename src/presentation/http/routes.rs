// src/presentation/http/routes.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::{
    controllers::{auth, players},
    error::HttpError,
    middleware::{ErrorHandler, catch_async, normalize_errors},
    state::HttpState,
};
use axum::{
    Extension, Json, Router,
    http::{Method, Uri},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState, errors: ErrorHandler) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/token", post(catch_async(auth::issue_token)))
        .route("/api/v1/auth/me", get(catch_async(auth::me)))
        .route(
            "/api/v1/players",
            get(catch_async(players::list_players)).post(catch_async(players::register_player)),
        )
        .route("/api/v1/players/{id}", get(catch_async(players::get_player)))
        .fallback(not_found)
        .layer(Extension(state))
        .layer(from_fn_with_state(errors, normalize_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

pub async fn not_found(uri: Uri) -> HttpError {
    ApplicationError::not_found(format!("Can't find {} on this server", uri.path())).into()
}
