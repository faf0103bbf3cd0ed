pub mod entity;
pub mod paging;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Comment, CommentUpdate, NewComment};
pub use paging::{CommentPageRequest, CommentSortField, SortDirection};
pub use repository::{CommentReadRepository, CommentWriteRepository};
pub use value_objects::{CommentContent, CommentId, CommentatorInfo, LikesInfo};
