// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: &str) -> ApplicationResult<AuthTokenDto>;

    /// Verification failures come back already classified, as
    /// `TokenInvalid` or `TokenExpired`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
