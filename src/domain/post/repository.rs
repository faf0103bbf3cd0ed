use crate::domain::errors::DomainResult;
use crate::domain::post::{Post, PostId};
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
}
