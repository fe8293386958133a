use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RevenueError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
