use super::{CommentCommandService, ownership::ensure_author};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentContent, CommentId, CommentUpdate},
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub content: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentView> {
        let id = CommentId::new(command.id)?;
        let content = CommentContent::new(command.content)?;

        let mut comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        ensure_author(actor, &comment, "update")?;

        comment.set_content(content, self.clock.now());
        let updated = self
            .write_repo
            .update_content(CommentUpdate::from_comment(&comment))
            .await?;

        tracing::info!(comment_id = %updated.id, "comment updated");
        Ok(self.enricher.enrich_one(updated, Some(actor.id)).await)
    }
}
