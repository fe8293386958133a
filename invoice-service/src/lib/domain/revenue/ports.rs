use async_trait::async_trait;

use crate::domain::revenue::models::Revenue;
use crate::revenue::errors::RevenueError;

#[async_trait]
pub trait RevenueServicePort: Send + Sync + 'static {
    /// Monthly revenue in calendar order.
    async fn list_revenues(&self) -> Result<Vec<Revenue>, RevenueError>;
}

#[async_trait]
pub trait RevenueRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Revenue>, RevenueError>;
}
