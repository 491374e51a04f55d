// src/infrastructure/repositories/memory_player.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    player::{NewPlayer, Player, PlayerId, PlayerRepository},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Roster {
    last_id: i64,
    players: BTreeMap<i64, Player>,
}

/// Process-local roster. Emails are unique, ids are assigned in insert order.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    roster: RwLock<Roster>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn insert(&self, new_player: NewPlayer) -> DomainResult<Player> {
        let mut roster = self.roster.write().await;

        if roster.players.values().any(|p| p.email == new_player.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let id = roster.last_id + 1;
        let player = Player {
            id: PlayerId::new(id)?,
            name: new_player.name,
            email: new_player.email,
            role: new_player.role,
            created_at: new_player.created_at,
        };
        roster.last_id = id;
        roster.players.insert(id, player.clone());
        Ok(player)
    }

    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Option<Player>> {
        let roster = self.roster.read().await;
        Ok(roster.players.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Player>> {
        let roster = self.roster.read().await;
        Ok(roster.players.values().cloned().collect())
    }
}
