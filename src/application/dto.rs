use crate::domain::player::{Player, PlayerRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: PlayerRole,
    pub created_at: DateTime<Utc>,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            id: player.id.into(),
            name: player.name,
            email: player.email,
            role: player.role,
            created_at: player.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
