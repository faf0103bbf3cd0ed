use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Caller identity recovered from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub login: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
