// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod posts;

use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult};

/// Identifiers travel as strings; anything that is not a positive integer
/// cannot name an existing record.
pub(crate) fn parse_id(raw: &str, resource: &str) -> HttpResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::not_found(format!("{resource} not found")))
        })
}
