// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_post_comments,
        crate::presentation::http::controllers::posts::create_comment,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::application::dto::Paginated<crate::application::dto::CommentView>,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::CreateCommentRequest,
            crate::presentation::http::controllers::comments::UpdateCommentRequest,
            crate::application::dto::CommentView,
            crate::application::dto::CommentatorInfoView,
            crate::application::dto::LikesInfoView
        )
    ),
    tags(
        (name = "Comments", description = "Post comment endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuthAddon),
    info(
        title = "Quill API",
        description = "Blog comments backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH`
/// (default `spec/openapi.json`) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
