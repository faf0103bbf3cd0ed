// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Verify a raw bearer token and return the subject it was issued for.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
