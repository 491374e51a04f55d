// src/presentation/http/controllers/auth.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, RequestExt, extract::Request};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub subject: String,
}

pub async fn issue_token(mut request: Request) -> HttpResult<Json<AuthTokenDto>> {
    let Extension(state) = request.extract_parts::<Extension<HttpState>>().await?;
    let Json(payload) = request.extract::<Json<TokenRequest>, _>().await?;

    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(ApplicationError::validation(["subject is required"]).into());
    }

    let token = state.services.token_manager().issue(subject).await.into_http()?;
    Ok(Json(token))
}

pub async fn me(mut request: Request) -> HttpResult<Json<AuthenticatedUser>> {
    let Authenticated(user) = request.extract_parts::<Authenticated>().await?;
    Ok(Json(user))
}
