//! Error type shared by every table-backed outgoing port.
//!
//! Absence is not failure: empty list results, a missing singleton row, a
//! missing role row and deletes of unknown ids all succeed. `RowNotFound` is
//! raised only where an operation required a specific row (update by id).

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Row not found")]
    RowNotFound,
}

impl StoreError {
    pub fn from_db_err(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotUpdated => StoreError::RowNotFound,
            other => StoreError::Database(other.to_string()),
        }
    }
}
