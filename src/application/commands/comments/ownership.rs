// src/application/commands/comments/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{
        Comment,
        specifications::{CommentSpecification, IsCommentAuthorSpec},
    },
};

pub(super) fn ensure_author(
    actor: &AuthenticatedUser,
    comment: &Comment,
    action: &str,
) -> ApplicationResult<()> {
    if IsCommentAuthorSpec::new(comment, actor.id).is_satisfied() {
        Ok(())
    } else {
        tracing::warn!(
            comment_id = %comment.id,
            actor_id = %actor.id,
            action,
            "comment ownership check failed"
        );
        Err(ApplicationError::forbidden(format!(
            "only the author may {action} this comment"
        )))
    }
}
