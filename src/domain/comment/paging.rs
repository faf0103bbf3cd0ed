// src/domain/comment/paging.rs
use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Columns a comment listing may be ordered by. Query values are matched
/// against this list; the SQL column name never comes from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CommentSortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "userLogin")]
    CommentatorLogin,
    #[serde(rename = "likesCount")]
    LikesCount,
    #[serde(rename = "dislikesCount")]
    DislikesCount,
    #[serde(rename = "id")]
    Id,
}

impl CommentSortField {
    pub fn from_query(value: &str) -> Option<Self> {
        match value.trim() {
            "createdAt" => Some(Self::CreatedAt),
            "content" => Some(Self::Content),
            "userLogin" | "commentatorInfo.userLogin" | "commentatorInfoUserLogin" => {
                Some(Self::CommentatorLogin)
            }
            "likesCount" | "likesInfo.likesCount" => Some(Self::LikesCount),
            "dislikesCount" | "likesInfo.dislikesCount" => Some(Self::DislikesCount),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    pub const fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Content => "content",
            Self::CommentatorLogin => "commentator_user_login",
            Self::LikesCount => "likes_count",
            Self::DislikesCount => "dislikes_count",
            Self::Id => "id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn from_query(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One page of a per-post comment listing, already normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPageRequest {
    page: u32,
    page_size: u32,
    pub sort_by: CommentSortField,
    pub sort_direction: SortDirection,
}

impl CommentPageRequest {
    /// Zero values fall back to the defaults and `page_size` is capped at
    /// [`MAX_PAGE_SIZE`].
    pub fn new(
        page: u32,
        page_size: u32,
        sort_by: CommentSortField,
        sort_direction: SortDirection,
    ) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };

        Self {
            page,
            page_size,
            sort_by,
            sort_direction,
        }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for CommentPageRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAGE,
            DEFAULT_PAGE_SIZE,
            CommentSortField::default(),
            SortDirection::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listing_contract() {
        let request = CommentPageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
        assert_eq!(request.sort_by, CommentSortField::CreatedAt);
        assert_eq!(request.sort_direction, SortDirection::Desc);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn page_size_is_capped() {
        let request =
            CommentPageRequest::new(2, 5_000, CommentSortField::Id, SortDirection::Asc);
        assert_eq!(request.page_size(), MAX_PAGE_SIZE);
        assert_eq!(request.offset(), 100);
    }

    #[test]
    fn offset_uses_previous_pages() {
        let request =
            CommentPageRequest::new(3, 10, CommentSortField::CreatedAt, SortDirection::Desc);
        assert_eq!(request.offset(), 20);
    }

    #[test]
    fn offset_does_not_overflow_on_huge_pages() {
        let request =
            CommentPageRequest::new(u32::MAX, 100, CommentSortField::Id, SortDirection::Asc);
        assert_eq!(request.offset(), u64::from(u32::MAX - 1) * 100);
    }

    #[test]
    fn sort_field_allow_list() {
        assert_eq!(
            CommentSortField::from_query("createdAt"),
            Some(CommentSortField::CreatedAt)
        );
        assert_eq!(
            CommentSortField::from_query("commentatorInfo.userLogin"),
            Some(CommentSortField::CommentatorLogin)
        );
        assert_eq!(CommentSortField::from_query("created_at; DROP TABLE comments"), None);
        assert_eq!(CommentSortField::from_query("postId"), None);
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!(SortDirection::from_query("ASC"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::from_query(" desc "), Some(SortDirection::Desc));
        assert_eq!(SortDirection::from_query("sideways"), None);
    }

    #[test]
    fn sql_tokens_are_fixed() {
        assert_eq!(CommentSortField::LikesCount.column(), "likes_count");
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
    }
}
