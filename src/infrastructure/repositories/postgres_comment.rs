// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentPageRequest, CommentReadRepository, CommentUpdate,
    CommentWriteRepository, CommentatorInfo, LikesInfo, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::{UserId, UserLogin};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COMMENT_COLUMNS: &str = "id, post_id, content, commentator_user_id, commentator_user_login, \
     likes_count, dislikes_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat `comments` row; the author snapshot and counters live in their own
/// columns and are folded back into nested value objects on the way out.
#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    content: String,
    commentator_user_id: i64,
    commentator_user_login: String,
    likes_count: i64,
    dislikes_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn counter(value: i64, column: &str) -> DomainResult<u64> {
    u64::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("negative value in comments.{column}")))
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            content: CommentContent::new(row.content)?,
            commentator: CommentatorInfo {
                user_id: UserId::new(row.commentator_user_id)?,
                user_login: UserLogin::new(row.commentator_user_login)?,
            },
            likes: LikesInfo {
                likes_count: counter(row.likes_count, "likes_count")?,
                dislikes_count: counter(row.dislikes_count, "dislikes_count")?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            content,
            commentator,
            created_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (post_id, content, commentator_user_id, commentator_user_login, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(post_id))
            .bind(content.as_str())
            .bind(i64::from(commentator.user_id))
            .bind(commentator.user_login.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update_content(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate {
            id,
            content,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE comments SET content = $1, updated_at = $2 WHERE id = $3
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(content.as_str())
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

impl PostgresCommentReadRepository {
    /// ORDER BY is assembled only from allow-listed tokens; `id` breaks ties
    /// so pages stay stable when the sort column repeats.
    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, page: &CommentPageRequest) {
        let direction = page.sort_direction.as_sql();
        builder
            .push(" ORDER BY ")
            .push(page.sort_by.column())
            .push(" ")
            .push(direction);
        if page.sort_by.column() != "id" {
            builder.push(", id ").push(direction);
        }
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM comments WHERE post_id = $1")
            .bind(i64::from(post_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0).unsigned_abs())
            .map_err(map_sqlx)
    }

    async fn list_by_post(
        &self,
        post_id: PostId,
        page: &CommentPageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COMMENT_COLUMNS);
        builder.push(" FROM comments WHERE post_id = ");
        builder.push_bind(i64::from(post_id));
        Self::apply_ordering(&mut builder, page);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.page_size()));
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
