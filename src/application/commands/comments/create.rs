// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, CommentatorInfo, NewComment},
        post::PostId,
    },
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentView> {
        let post_id = PostId::new(command.post_id)?;
        let content = CommentContent::new(command.content)?;

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "post with id {post_id} not found"
            )));
        }

        let new_comment = NewComment {
            post_id,
            content,
            commentator: CommentatorInfo::snapshot_of(&author),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_comment).await?;
        tracing::info!(comment_id = %created.id, post_id = %post_id, "comment created");
        Ok(created.into())
    }
}
