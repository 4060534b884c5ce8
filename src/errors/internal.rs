use thiserror::Error;

/// Failures raised below the API boundary
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("database error during {operation}: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl InternalError {
    /// Create a Database error tagged with the failing store operation
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database {
            operation: operation.to_string(),
            source,
        }
    }
}
