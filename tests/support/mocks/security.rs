// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use quill_core::application::{
    ApplicationResult,
    dto::AuthenticatedUser,
    error::ApplicationError,
    ports::security::TokenManager,
};
use quill_core::domain::user::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";
/// ユーザーレコードが存在しない主体のトークン
pub const GHOST_TOKEN: &str = "ghost-token";

fn user(id: i64, login: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        login: login.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn alice() -> AuthenticatedUser {
    user(1, "alice")
}

pub fn bob() -> AuthenticatedUser {
    user(2, "bob")
}

pub fn ghost() -> AuthenticatedUser {
    user(99, "ghost")
}

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ALICE_TOKEN => Ok(alice()),
            BOB_TOKEN => Ok(bob()),
            GHOST_TOKEN => Ok(ghost()),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
