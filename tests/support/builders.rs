// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use quill_core::domain::comment::{
    Comment, CommentContent, CommentId, CommentatorInfo, LikesInfo,
};
use quill_core::domain::post::PostId;
use quill_core::domain::user::{UserId, UserLogin};

use super::mocks::fixed_now;

pub struct CommentBuilder {
    id: i64,
    post_id: i64,
    content: String,
    user_id: i64,
    user_login: String,
    likes_count: u64,
    dislikes_count: u64,
    created_at: DateTime<Utc>,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            post_id: 1,
            content: "a perfectly ordinary comment".into(),
            user_id: 1,
            user_login: "alice".into(),
            likes_count: 0,
            dislikes_count: 0,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn post(mut self, post_id: i64) -> Self {
        self.post_id = post_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, user_id: i64, login: impl Into<String>) -> Self {
        self.user_id = user_id;
        self.user_login = login.into();
        self
    }

    pub fn likes(mut self, likes: u64, dislikes: u64) -> Self {
        self.likes_count = likes;
        self.dislikes_count = dislikes;
        self
    }

    /// `fixed_now()` からの経過分で作成時刻を指定する
    pub fn minutes_after_epoch(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: CommentId::new(self.id).expect("invalid comment id"),
            post_id: PostId::new(self.post_id).expect("invalid post id"),
            content: CommentContent::new(self.content).expect("invalid content"),
            commentator: CommentatorInfo {
                user_id: UserId::new(self.user_id).expect("invalid user id"),
                user_login: UserLogin::new(self.user_login).expect("invalid login"),
            },
            likes: LikesInfo {
                likes_count: self.likes_count,
                dislikes_count: self.dislikes_count,
            },
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
