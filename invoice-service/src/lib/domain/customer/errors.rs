use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error)]
pub enum CustomerError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
