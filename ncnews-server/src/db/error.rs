//! Database error type and store error-code classification
//!
//! PostgreSQL reports bad input and broken references through SQLSTATE
//! codes. They are recognised here, once, so the HTTP layer only ever sees
//! typed variants.

use std::borrow::Cow;

/// `invalid_text_representation`, e.g. `'abc'::int`
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// `numeric_value_out_of_range`, e.g. an INT overflow on `votes + $1`
pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// `foreign_key_violation`
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// The store rejected a value's representation or range
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An insert or update referenced a row that does not exist
    #[error("foreign key violation on {}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    ForeignKey { constraint: Option<String> },

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Map a SQLSTATE code to a typed variant, if it is one we translate.
    pub fn classify(code: Option<&str>, constraint: Option<&str>, message: &str) -> Option<Self> {
        match code? {
            INVALID_TEXT_REPRESENTATION | NUMERIC_VALUE_OUT_OF_RANGE => Some(Self::InvalidInput {
                message: message.to_owned(),
            }),
            FOREIGN_KEY_VIOLATION => Some(Self::ForeignKey {
                constraint: constraint.map(str::to_owned),
            }),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            let code: Option<Cow<'_, str>> = db.code();
            if let Some(classified) = Self::classify(code.as_deref(), db.constraint(), db.message()) {
                return classified;
            }
        }
        Self::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_invalid_text() {
        let err = DbError::classify(Some("22P02"), None, "invalid input syntax for type integer").unwrap();
        assert!(matches!(err, DbError::InvalidInput { .. }));
    }

    #[test]
    fn classifies_out_of_range() {
        let err = DbError::classify(Some("22003"), None, "integer out of range").unwrap();
        assert!(matches!(err, DbError::InvalidInput { .. }));
    }

    #[test]
    fn classifies_foreign_key() {
        let err = DbError::classify(Some("23503"), Some("comments_author_fkey"), "violates").unwrap();
        match err {
            DbError::ForeignKey { constraint } => {
                assert_eq!(constraint.as_deref(), Some("comments_author_fkey"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn leaves_other_codes_alone() {
        assert!(DbError::classify(Some("23505"), None, "duplicate key").is_none());
        assert!(DbError::classify(None, None, "no code").is_none());
    }

    #[test]
    fn non_database_errors_stay_unclassified() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
