use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::paging::CommentPageRequest;
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update_content(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64>;
    async fn list_by_post(
        &self,
        post_id: PostId,
        page: &CommentPageRequest,
    ) -> DomainResult<Vec<Comment>>;
}
