use std::sync::Arc;

use crate::{
    application::dto::AuthenticatedUser,
    domain::{
        comment::CommentReadRepository,
        post::PostRepository,
        user::{UserId, UserRepository},
    },
};

use super::LikeStatusEnricher;

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) enricher: Arc<LikeStatusEnricher>,
}

impl CommentQueryService {
    pub fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        enricher: Arc<LikeStatusEnricher>,
    ) -> Self {
        Self {
            read_repo,
            post_repo,
            user_repo,
            enricher,
        }
    }

    /// Resolve the viewer once per request. A token whose user no longer
    /// exists, or a failed lookup, reads as an anonymous viewer.
    pub(super) async fn resolve_viewer(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> Option<UserId> {
        let actor = actor?;
        match self.user_repo.find_by_id(actor.id).await {
            Ok(Some(user)) => Some(user.id),
            Ok(None) => {
                tracing::debug!(user_id = %actor.id, "token subject has no user record");
                None
            }
            Err(err) => {
                tracing::warn!(user_id = %actor.id, error = %err, "viewer lookup failed");
                None
            }
        }
    }
}
