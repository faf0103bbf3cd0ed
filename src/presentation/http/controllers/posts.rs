// src/presentation/http/controllers/posts.rs
use super::parse_id;
use crate::application::{
    commands::comments::CreateCommentCommand,
    dto::{CommentView, Paginated},
    queries::comments::{CommentPageParams, ListPostCommentsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Listing parameters are kept as raw strings so that malformed values fall
/// back to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListCommentsParams {
    /// 1-based page number (default 1).
    pub page_number: Option<String>,
    /// Items per page (default 10, at most 100).
    pub page_size: Option<String>,
    /// One of `createdAt`, `content`, `userLogin`, `likesCount`, `dislikesCount`, `id`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`).
    pub sort_direction: Option<String>,
}

impl From<ListCommentsParams> for CommentPageParams {
    fn from(params: ListCommentsParams) -> Self {
        Self {
            page_number: params.page_number,
            page_size: params.page_size,
            sort_by: params.sort_by,
            sort_direction: params.sort_direction,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    params(
        ("post_id" = String, Path, description = "Post identifier"),
        ListCommentsParams
    ),
    responses(
        (status = 200, description = "One page of the post's comments.", body = Paginated<CommentView>),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn list_post_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(post_id): Path<String>,
    Query(params): Query<ListCommentsParams>,
) -> HttpResult<Json<Paginated<CommentView>>> {
    let post_id = parse_id(&post_id, "post")?;

    state
        .services
        .comment_queries
        .list_post_comments(
            actor.0.as_ref(),
            ListPostCommentsQuery {
                post_id,
                page: params.into(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = String, Path, description = "Post identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = crate::application::dto::CommentView),
        (status = 400, description = "Validation error.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or user not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentView>)> {
    let post_id = parse_id(&post_id, "post")?;
    let command = CreateCommentCommand {
        post_id,
        content: payload.content,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}
