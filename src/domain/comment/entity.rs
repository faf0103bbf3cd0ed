use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentatorInfo, LikesInfo};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub content: CommentContent,
    pub commentator: CommentatorInfo,
    pub likes: LikesInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.commentator.user_id == user_id
    }

    pub fn set_content(&mut self, content: CommentContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub content: CommentContent,
    pub commentator: CommentatorInfo,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub content: CommentContent,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            updated_at: comment.updated_at,
        }
    }
}
