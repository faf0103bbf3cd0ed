// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::comments::CommentCommandService,
        ports::{security::TokenManager, time::Clock},
        queries::comments::{CommentQueryService, LikeStatusEnricher},
    },
    domain::{
        comment::{CommentReadRepository, CommentWriteRepository},
        like::LikeRepository,
        post::PostRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        like_repo: Arc<dyn LikeRepository>,
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let enricher = Arc::new(LikeStatusEnricher::new(like_repo));

        let comment_commands = Arc::new(CommentCommandService::new(
            comment_write_repo,
            Arc::clone(&comment_read_repo),
            Arc::clone(&post_repo),
            Arc::clone(&user_repo),
            Arc::clone(&enricher),
            clock,
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            comment_read_repo,
            post_repo,
            user_repo,
            enricher,
        ));

        Self {
            comment_commands,
            comment_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
