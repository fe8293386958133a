use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::domain::customer::models::CustomerRef;
use crate::domain::customer::models::CustomerSummary;

#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// All customers ordered by name.
    async fn list_customers(&self) -> Result<Vec<CustomerRef>, CustomerError>;

    /// Customers whose name or email contains `query` (case-insensitive),
    /// with their invoice totals, ordered by name.
    async fn filtered_customers(&self, query: &str)
        -> Result<Vec<CustomerSummary>, CustomerError>;

    async fn customer_count(&self) -> Result<i64, CustomerError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<CustomerRef>, CustomerError>;

    async fn search_with_totals(&self, query: &str)
        -> Result<Vec<CustomerSummary>, CustomerError>;

    async fn count(&self) -> Result<i64, CustomerError>;
}
