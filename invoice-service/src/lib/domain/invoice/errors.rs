use thiserror::Error;

use crate::domain::pagination::PageError;

/// Error for InvoiceId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount must be greater than zero, got {0}")]
    NotPositive(i64),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceStatusError {
    #[error("Status is required")]
    Empty,

    #[error("Status must be pending or paid, got {0}")]
    Unknown(String),
}

/// Top-level error for invoice operations
#[derive(Debug, Clone, Error)]
pub enum InvoiceError {
    #[error("Invalid invoice ID: {0}")]
    InvalidId(#[from] InvoiceIdError),

    #[error("Invalid customer ID: {0}")]
    InvalidCustomerId(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] InvoiceStatusError),

    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Invoice not found: {0}")]
    NotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
