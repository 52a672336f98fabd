//! New comment validation

use super::ValidationError;

/// Validated payload for a comment insert.
///
/// Both fields must be present and non-blank. Whether the author and the
/// article exist is left to the store's foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    username: String,
    body: String,
}

impl NewComment {
    pub fn new(username: Option<String>, body: Option<String>) -> Result<Self, ValidationError> {
        let username = required("username", username)?;
        let body = required("body", body)?;
        Ok(Self { username, body })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(v) if v.trim().is_empty() => Err(ValidationError::Empty { field }),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_comment() {
        let comment = NewComment::new(Some("butter_bridge".into()), Some("Nice".into())).unwrap();
        assert_eq!(comment.username(), "butter_bridge");
        assert_eq!(comment.body(), "Nice");
    }

    #[test]
    fn rejects_missing_username() {
        let err = NewComment::new(None, Some("Nice".into())).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "username" });
    }

    #[test]
    fn rejects_missing_body() {
        let err = NewComment::new(Some("butter_bridge".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "body" });
    }

    #[test]
    fn rejects_blank_fields() {
        let err = NewComment::new(Some("  ".into()), Some("Nice".into())).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "username" });

        let err = NewComment::new(Some("butter_bridge".into()), Some(String::new())).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "body" });
    }
}
