use crate::domain::comment::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::like::LikeStatus;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Point lookup of the reaction `user_id` left on `comment_id`.
    async fn find_status(
        &self,
        comment_id: CommentId,
        user_id: UserId,
    ) -> DomainResult<Option<LikeStatus>>;
}
