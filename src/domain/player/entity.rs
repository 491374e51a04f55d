// src/domain/player/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::player::value_objects::{PlayerId, PlayerRole};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    pub role: PlayerRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub email: String,
    pub role: PlayerRole,
    pub created_at: DateTime<Utc>,
}

impl NewPlayer {
    /// Validates every field and reports all failures at once, in field order.
    pub fn new(
        name: &str,
        email: &str,
        role: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let mut problems = Vec::new();

        let name = name.trim();
        if name.is_empty() {
            problems.push("name is required".to_string());
        } else if name.chars().count() > 80 {
            problems.push("name must be at most 80 characters".to_string());
        }

        let email = email.trim().to_ascii_lowercase();
        if !is_plausible_email(&email) {
            problems.push("email is invalid".to_string());
        }

        let role = match role {
            Some(raw) => match raw.parse::<PlayerRole>() {
                Ok(role) => role,
                Err(DomainError::Validation(mut msgs)) => {
                    problems.append(&mut msgs);
                    PlayerRole::default()
                }
                Err(other) => return Err(other),
            },
            None => PlayerRole::default(),
        };

        if !problems.is_empty() {
            return Err(DomainError::Validation(problems));
        }

        Ok(Self {
            name: name.to_string(),
            email,
            role,
            created_at,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
