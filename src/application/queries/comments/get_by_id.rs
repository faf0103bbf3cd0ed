use super::CommentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentByIdQuery {
    pub id: i64,
}

impl CommentQueryService {
    pub async fn get_comment_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetCommentByIdQuery,
    ) -> ApplicationResult<CommentView> {
        let id = CommentId::new(query.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let viewer = self.resolve_viewer(actor).await;
        Ok(self.enricher.enrich_one(comment, viewer).await)
    }
}
