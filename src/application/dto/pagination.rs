use crate::domain::comment::{CommentPageRequest, CommentSortField, SortDirection};
use serde::Serialize;
use utoipa::ToSchema;

/// Page descriptor derived from a normalised request and the matching row
/// count. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub total_count: u64,
    pub page_size: u32,
    pub pages_count: u64,
    pub page: u32,
    pub sort_by: CommentSortField,
    pub sort_direction: SortDirection,
}

impl PagePlan {
    pub fn new(request: &CommentPageRequest, total_count: u64) -> Self {
        let page_size = request.page_size();
        Self {
            total_count,
            page_size,
            pages_count: total_count.div_ceil(u64::from(page_size)),
            page: request.page(),
            sort_by: request.sort_by,
            sort_direction: request.sort_direction,
        }
    }
}

/// One page of results plus the descriptor it was cut with.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub pages_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(plan: &PagePlan, items: Vec<T>) -> Self {
        Self {
            pages_count: plan.pages_count,
            page: plan.page,
            page_size: plan.page_size,
            total_count: plan.total_count,
            items,
        }
    }
}
