// src/domain/like/mod.rs
pub mod repository;

pub use repository::LikeRepository;

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A viewer's reaction to a comment. A missing `likes` row reads as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

impl LikeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Like => "Like",
            Self::Dislike => "Dislike",
        }
    }
}

impl fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikeStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "None" => Ok(Self::None),
            "Like" => Ok(Self::Like),
            "Dislike" => Ok(Self::Dislike),
            other => Err(DomainError::Validation(format!(
                "unknown like status: {other}"
            ))),
        }
    }
}
