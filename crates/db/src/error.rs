use taskdeck_core::error::CoreError;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write. Carries the constraint name.
    #[error("Duplicate value violates unique constraint: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

/// Store failures are internal unless a service interprets them first.
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_is_a_plain_database_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, StoreError::Database(sqlx::Error::RowNotFound));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn store_errors_become_internal_core_errors() {
        let core: CoreError = StoreError::UniqueViolation("uq_users_email".into()).into();
        assert_matches!(core, CoreError::Internal(msg) if msg.contains("uq_users_email"));
    }
}
