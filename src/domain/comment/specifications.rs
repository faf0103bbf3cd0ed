use crate::domain::comment::entity::Comment;
use crate::domain::user::UserId;

pub trait CommentSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the recorded author may edit or remove a comment.
pub struct IsCommentAuthorSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> IsCommentAuthorSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId) -> Self {
        Self { comment, user_id }
    }
}

impl CommentSpecification for IsCommentAuthorSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.comment.is_authored_by(self.user_id)
    }
}
