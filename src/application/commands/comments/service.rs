// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, queries::comments::LikeStatusEnricher},
    domain::{
        comment::{CommentReadRepository, CommentWriteRepository},
        post::PostRepository,
        user::UserRepository,
    },
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) enricher: Arc<LikeStatusEnricher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        enricher: Arc<LikeStatusEnricher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            post_repo,
            user_repo,
            enricher,
            clock,
        }
    }
}
