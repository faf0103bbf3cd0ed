// src/application/commands/comments/delete.rs
use super::{CommentCommandService, ownership::ensure_author};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        ensure_author(actor, &comment, "delete")?;

        self.write_repo.delete(id).await?;
        tracing::info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
