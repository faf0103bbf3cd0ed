use super::map_sqlx;
use crate::domain::comment::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::like::{LikeRepository, LikeStatus};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn find_status(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<LikeStatus>> {
        let status = sqlx::query_scalar::<_, String>(
            "SELECT status FROM likes WHERE comment_id = $1 AND user_id = $2",
        )
        .bind(i64::from(comment_id))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        status.map(|raw| raw.parse::<LikeStatus>()).transpose()
    }
}
