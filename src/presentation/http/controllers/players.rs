// src/presentation/http/controllers/players.rs
use crate::application::{commands::players::RegisterPlayerCommand, dto::PlayerDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, RequestExt,
    extract::{Path, Request},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

pub async fn register_player(mut request: Request) -> HttpResult<(StatusCode, Json<PlayerDto>)> {
    let Extension(state) = request.extract_parts::<Extension<HttpState>>().await?;
    let Authenticated(actor) = request.extract_parts::<Authenticated>().await?;
    let Json(payload) = request.extract::<Json<RegisterPlayerRequest>, _>().await?;

    let command = RegisterPlayerCommand {
        name: payload.name,
        email: payload.email,
        role: payload.role,
    };

    let player = state
        .services
        .player_commands
        .register_player(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn get_player(mut request: Request) -> HttpResult<Json<PlayerDto>> {
    let Extension(state) = request.extract_parts::<Extension<HttpState>>().await?;
    let Path(id) = request.extract_parts::<Path<i64>>().await?;

    let player = state.services.player_queries.get_player(id).await.into_http()?;
    Ok(Json(player))
}

pub async fn list_players(mut request: Request) -> HttpResult<Json<Vec<PlayerDto>>> {
    let Extension(state) = request.extract_parts::<Extension<HttpState>>().await?;

    let players = state.services.player_queries.list_players().await.into_http()?;
    Ok(Json(players))
}
