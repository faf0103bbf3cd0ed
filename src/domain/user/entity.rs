// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, UserLogin};
use chrono::{DateTime, Utc};

/// Read model of a registered user. Account lifecycle lives elsewhere; the
/// comments core only needs the id and the current login.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: UserLogin,
    pub created_at: DateTime<Utc>,
}
