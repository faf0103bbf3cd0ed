mod enrichment;
mod get_by_id;
mod list;
mod service;

pub use enrichment::LikeStatusEnricher;
pub use get_by_id::GetCommentByIdQuery;
pub use list::{CommentPageParams, ListPostCommentsQuery};
pub use service::CommentQueryService;
