use crate::domain::errors::DomainError;

const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_CONTENT_CHECK: &str = "comments_content_not_blank_chk";
const CNT_COMMENT_COUNTERS_CHECK: &str = "comments_counters_non_negative_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    CNT_COMMENT_CONTENT_CHECK => {
                        DomainError::Validation("content cannot be empty".into())
                    }
                    CNT_COMMENT_COUNTERS_CHECK => {
                        DomainError::Validation("like counters cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
