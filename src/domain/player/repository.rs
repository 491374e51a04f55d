use crate::domain::errors::DomainResult;
use crate::domain::player::{
    entity::{NewPlayer, Player},
    value_objects::PlayerId,
};
use async_trait::async_trait;

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already registered.
    async fn insert(&self, new_player: NewPlayer) -> DomainResult<Player>;

    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Option<Player>>;

    async fn list(&self) -> DomainResult<Vec<Player>>;
}
