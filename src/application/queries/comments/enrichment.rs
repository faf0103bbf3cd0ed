use std::sync::Arc;

use futures::future::join_all;

use crate::{
    application::dto::CommentView,
    domain::{
        comment::{Comment, CommentId},
        like::{LikeRepository, LikeStatus},
        user::UserId,
    },
};

/// Attaches the viewer's own reaction (`likesInfo.myStatus`) to comments.
pub struct LikeStatusEnricher {
    like_repo: Arc<dyn LikeRepository>,
}

impl LikeStatusEnricher {
    pub fn new(like_repo: Arc<dyn LikeRepository>) -> Self {
        Self { like_repo }
    }

    /// Lookups for every comment run concurrently; the output keeps the
    /// order of `comments` regardless of which lookup finishes first.
    pub async fn enrich(&self, comments: Vec<Comment>, viewer: Option<UserId>) -> Vec<CommentView> {
        let Some(viewer) = viewer else {
            return comments.into_iter().map(CommentView::from).collect();
        };

        join_all(
            comments
                .into_iter()
                .map(|comment| self.enrich_one(comment, Some(viewer))),
        )
        .await
    }

    pub async fn enrich_one(&self, comment: Comment, viewer: Option<UserId>) -> CommentView {
        let status = match viewer {
            Some(user_id) => self.status_for(comment.id, user_id).await,
            None => LikeStatus::None,
        };
        CommentView::from(comment).with_my_status(status)
    }

    async fn status_for(&self, comment_id: CommentId, user_id: UserId) -> LikeStatus {
        match self.like_repo.find_status(comment_id, user_id).await {
            Ok(status) => status.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(
                    comment_id = %comment_id,
                    user_id = %user_id,
                    error = %err,
                    "like status lookup failed, reporting None"
                );
                LikeStatus::None
            }
        }
    }
}
