// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::players::PlayerCommandService,
        ports::{security::TokenManager, time::Clock},
        queries::players::PlayerQueryService,
    },
    domain::player::PlayerRepository,
};

pub struct ApplicationServices {
    pub player_commands: Arc<PlayerCommandService>,
    pub player_queries: Arc<PlayerQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        player_repo: Arc<dyn PlayerRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let player_commands = Arc::new(PlayerCommandService::new(
            Arc::clone(&player_repo),
            Arc::clone(&clock),
        ));
        let player_queries = Arc::new(PlayerQueryService::new(Arc::clone(&player_repo)));

        Self {
            player_commands,
            player_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
