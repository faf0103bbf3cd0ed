// src/presentation/http/controllers/comments.rs
use super::parse_id;
use crate::application::{
    commands::comments::{DeleteCommentCommand, UpdateCommentCommand},
    dto::CommentView,
    queries::comments::GetCommentByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "The comment.", body = crate::application::dto::CommentView),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<CommentView>> {
    let id = parse_id(&id, "comment")?;

    state
        .services
        .comment_queries
        .get_comment_by_id(actor.0.as_ref(), GetCommentByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = crate::application::dto::CommentView),
        (status = 400, description = "Validation error.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCommentRequest>,
) -> HttpResult<Json<CommentView>> {
    let id = parse_id(&id, "comment")?;
    let command = UpdateCommentCommand {
        id,
        content: payload.content,
    };

    state
        .services
        .comment_commands
        .update_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id, "comment")?;

    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
