// src/application/commands/players.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, PlayerDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::player::{NewPlayer, PlayerRepository},
};

#[derive(Debug, Clone)]
pub struct RegisterPlayerCommand {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

pub struct PlayerCommandService {
    repo: Arc<dyn PlayerRepository>,
    clock: Arc<dyn Clock>,
}

impl PlayerCommandService {
    pub fn new(repo: Arc<dyn PlayerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn register_player(
        &self,
        actor: &AuthenticatedUser,
        command: RegisterPlayerCommand,
    ) -> ApplicationResult<PlayerDto> {
        let new_player = NewPlayer::new(
            &command.name,
            &command.email,
            command.role.as_deref(),
            self.clock.now(),
        )?;

        let player = self.repo.insert(new_player).await?;
        tracing::info!(player_id = %player.id, registered_by = %actor.subject, "player registered");
        Ok(player.into())
    }
}
