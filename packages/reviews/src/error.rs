use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by the gig and review services.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field violates its declared constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A `gig_id` or `user_id` does not resolve to an existing record.
    #[error("Reference error: {0}")]
    Reference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Dependent reviews survived a cascading delete. The transaction was rolled back.
    #[error("Cascade delete failed: {0}")]
    CascadeDelete(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!("Foreign key violation: {detail}");
                StoreError::Reference(detail)
            }
            _ => StoreError::Database(err),
        }
    }
}
