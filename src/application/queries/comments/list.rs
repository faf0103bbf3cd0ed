use super::CommentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentView, PagePlan, Paginated},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentPageRequest, CommentSortField, SortDirection},
        post::PostId,
    },
};

/// Raw listing parameters exactly as they arrived in the query string.
#[derive(Debug, Clone, Default)]
pub struct CommentPageParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl CommentPageParams {
    /// Absent or unusable values fall back to the listing defaults rather
    /// than rejecting the request.
    pub fn normalize(&self) -> CommentPageRequest {
        let page = positive_int(self.page_number.as_deref()).unwrap_or(0);
        let page_size = positive_int(self.page_size.as_deref()).unwrap_or(0);
        let sort_by = self
            .sort_by
            .as_deref()
            .and_then(CommentSortField::from_query)
            .unwrap_or_default();
        let sort_direction = self
            .sort_direction
            .as_deref()
            .and_then(SortDirection::from_query)
            .unwrap_or_default();

        CommentPageRequest::new(page, page_size, sort_by, sort_direction)
    }
}

fn positive_int(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim();
    match raw.parse::<u32>() {
        Ok(value) => Some(value).filter(|value| *value > 0),
        // Digits only but larger than u32: saturate instead of dropping.
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => Some(u32::MAX),
        Err(_) => None,
    }
}

pub struct ListPostCommentsQuery {
    pub post_id: i64,
    pub page: CommentPageParams,
}

impl CommentQueryService {
    pub async fn list_post_comments(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostCommentsQuery,
    ) -> ApplicationResult<Paginated<CommentView>> {
        let post_id = PostId::new(query.post_id)?;
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "post with id {post_id} not found"
            )));
        }

        let request = query.page.normalize();
        let total_count = self.read_repo.count_by_post(post_id).await?;
        let plan = PagePlan::new(&request, total_count);
        let comments = self.read_repo.list_by_post(post_id, &request).await?;

        let viewer = self.resolve_viewer(actor).await;
        let items = self.enricher.enrich(comments, viewer).await;

        Ok(Paginated::new(&plan, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        page_number: Option<&str>,
        page_size: Option<&str>,
        sort_by: Option<&str>,
        sort_direction: Option<&str>,
    ) -> CommentPageParams {
        CommentPageParams {
            page_number: page_number.map(str::to_owned),
            page_size: page_size.map(str::to_owned),
            sort_by: sort_by.map(str::to_owned),
            sort_direction: sort_direction.map(str::to_owned),
        }
    }

    #[test]
    fn empty_params_use_defaults() {
        let request = CommentPageParams::default().normalize();
        assert_eq!(request, CommentPageRequest::default());
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let request = params(Some("3"), Some("25"), Some("likesCount"), Some("asc")).normalize();
        assert_eq!(request.page(), 3);
        assert_eq!(request.page_size(), 25);
        assert_eq!(request.sort_by, CommentSortField::LikesCount);
        assert_eq!(request.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let request = params(Some("abc"), Some("-4"), Some("password"), Some("up")).normalize();
        assert_eq!(request, CommentPageRequest::default());
    }

    #[test]
    fn zero_is_not_a_page() {
        let request = params(Some("0"), Some("0"), None, None).normalize();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn oversized_page_size_is_capped() {
        let request = params(None, Some("99999999999"), None, None).normalize();
        assert_eq!(request.page_size(), 100);
    }
}
