use crate::domain::{comment::Comment, like::LikeStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfoView {
    pub user_id: String,
    pub user_login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfoView {
    pub likes_count: u64,
    pub dislikes_count: u64,
    #[schema(value_type = String, example = "None")]
    pub my_status: LikeStatus,
}

/// Comment as returned to API clients. Identifiers are rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorInfoView,
    pub likes_info: LikesInfoView,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    pub fn with_my_status(mut self, status: LikeStatus) -> Self {
        self.likes_info.my_status = status;
        self
    }
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: i64::from(comment.id).to_string(),
            content: comment.content.into(),
            commentator_info: CommentatorInfoView {
                user_id: i64::from(comment.commentator.user_id).to_string(),
                user_login: comment.commentator.user_login.into(),
            },
            likes_info: LikesInfoView {
                likes_count: comment.likes.likes_count,
                dislikes_count: comment.likes.dislikes_count,
                my_status: LikeStatus::None,
            },
            created_at: comment.created_at,
        }
    }
}
