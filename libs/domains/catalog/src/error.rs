use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product {0} not found")]
    NotFound(i64),

    /// Delete blocked because other rows still reference the product
    #[error("Integrity violation: {0}")]
    DatabaseIntegrity(String),

    /// A product referenced a category that does not exist
    #[error("Category {0} not found")]
    CategoryNotFound(i64),

    /// Lookup of a category that does not exist
    #[error("Category {0} does not exist")]
    NoSuchCategory(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<DatabaseError> for CatalogError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::IntegrityViolation(msg) => CatalogError::DatabaseIntegrity(msg),
            other => CatalogError::Internal(other.to_string()),
        }
    }
}

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            CatalogError::DatabaseIntegrity(_) => {
                AppError::IntegrityViolation("Integrity violation".to_string())
            }
            CatalogError::CategoryNotFound(id) => {
                AppError::BadRequest(format!("Category {} not found", id))
            }
            CatalogError::NoSuchCategory(id) => {
                AppError::NotFound(format!("Category {} not found", id))
            }
            CatalogError::Validation(msg) => AppError::InvalidInput(msg),
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: CatalogError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_of(CatalogError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(CatalogError::DatabaseIntegrity("fk".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CatalogError::CategoryNotFound(9)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CatalogError::NoSuchCategory(9)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CatalogError::Validation("price".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CatalogError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_integrity_violation_maps_to_database_integrity() {
        let err: CatalogError = DatabaseError::IntegrityViolation("order_items".into()).into();
        assert!(matches!(err, CatalogError::DatabaseIntegrity(_)));

        let err: CatalogError = DatabaseError::Generic("timeout".into()).into();
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
