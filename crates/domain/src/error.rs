//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SsmgrError`]
//! via `#[from]`. There are no `String` variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SsmgrError {
    /// A value object failed its invariant checks.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A caller-supplied argument is outside the accepted domain.
    #[error("invalid argument")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// A lookup by id found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Invariant violations raised while building or checking value objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("server id must not be empty")]
    EmptyServerId,
    #[error("server address must not be empty")]
    EmptyAddress,
    #[error("duplicate server id: {0}")]
    DuplicateServerId(String),
    #[error("name must not be empty")]
    EmptyName,
    #[error("phone must not be empty")]
    EmptyPhone,
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("malformed identifier: {0:?}")]
    MalformedId(String),
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
}

/// Arguments rejected before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    #[error("columns per row must be a positive integer, got {0}")]
    ColumnsPerRow(i64),
}

/// Lookup miss for a named kind of record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: SsmgrError = ValidationError::EmptyAddress.into();
        assert!(matches!(
            err,
            SsmgrError::Validation(ValidationError::EmptyAddress)
        ));
    }

    #[test]
    fn should_describe_rejected_column_count() {
        let err = InvalidArgumentError::ColumnsPerRow(-2);
        assert_eq!(
            err.to_string(),
            "columns per row must be a positive integer, got -2"
        );
    }

    #[test]
    fn should_name_missing_record() {
        let err = NotFoundError {
            entity: "Server",
            id: "JP".to_string(),
        };
        assert_eq!(err.to_string(), "Server JP not found");
    }
}
