// src/application/queries/players.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PlayerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::player::{PlayerId, PlayerRepository},
};

pub struct PlayerQueryService {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerQueryService {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_player(&self, id: i64) -> ApplicationResult<PlayerDto> {
        let id = PlayerId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(PlayerDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("player {id} not found")))
    }

    pub async fn list_players(&self) -> ApplicationResult<Vec<PlayerDto>> {
        let players = self.repo.list().await?;
        Ok(players.into_iter().map(PlayerDto::from).collect())
    }
}
