#[cfg(feature = "postgres")]
use sea_orm::{DbErr, SqlErr};

/// Unified database error type for all database operations
///
/// Repositories return this instead of raw driver errors so that callers can
/// tell constraint failures apart from infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(DbErr),

    /// A write or delete was rejected by a referential or unique constraint
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// The targeted row does not exist
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Generic(String),
}

impl DatabaseError {
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, DatabaseError::IntegrityViolation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::RecordNotFound(_))
    }
}

#[cfg(feature = "postgres")]
impl From<DbErr> for DatabaseError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return DatabaseError::IntegrityViolation(msg);
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(msg) => DatabaseError::RecordNotFound(msg),
            DbErr::RecordNotUpdated => {
                DatabaseError::RecordNotFound("no row matched the update".to_string())
            }
            other => DatabaseError::Postgres(other),
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_is_classified() {
        let err: DatabaseError = DbErr::RecordNotFound("products.id = 7".to_string()).into();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("products.id = 7"));
    }

    #[test]
    fn test_record_not_updated_is_not_found() {
        let err: DatabaseError = DbErr::RecordNotUpdated.into();
        assert!(err.is_not_found());
        assert!(!err.is_integrity_violation());
    }

    #[test]
    fn test_other_errors_stay_postgres() {
        let err: DatabaseError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, DatabaseError::Postgres(_)));
        assert!(err.to_string().contains("boom"));
    }
}
