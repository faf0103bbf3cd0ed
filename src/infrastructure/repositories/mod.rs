// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_like;
mod postgres_post;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
pub use postgres_like::PostgresLikeRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_user::PostgresUserRepository;
