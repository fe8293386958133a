use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::customer::ports::CustomerRepository;
use crate::customer::ports::CustomerServicePort;
use crate::domain::customer::models::CustomerRef;
use crate::domain::customer::models::CustomerSummary;

pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn list_customers(&self) -> Result<Vec<CustomerRef>, CustomerError> {
        self.repository.list_all().await
    }

    async fn filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerSummary>, CustomerError> {
        self.repository.search_with_totals(query.trim()).await
    }

    async fn customer_count(&self) -> Result<i64, CustomerError> {
        self.repository.count().await
    }
}
