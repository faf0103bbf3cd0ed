pub mod auth;
pub mod comments;
pub mod pagination;
pub mod serde_time;

pub use auth::AuthenticatedUser;
pub use comments::{CommentView, CommentatorInfoView, LikesInfoView};
pub use pagination::{PagePlan, Paginated};
