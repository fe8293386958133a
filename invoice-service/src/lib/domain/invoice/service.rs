use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceCommand;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceWithCustomer;
use crate::domain::invoice::models::PageCount;
use crate::domain::invoice::models::StatusCount;
use crate::domain::pagination::Page;
use crate::invoice::errors::InvoiceError;
use crate::invoice::ports::InvoiceRepository;
use crate::invoice::ports::InvoiceServicePort;

/// Domain service implementation for invoice operations.
pub struct InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    repository: Arc<IR>,
}

impl<IR> InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> InvoiceServicePort for InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    async fn latest_invoices(&self, page: Page) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        self.repository.list_latest(page).await
    }

    async fn filtered_invoices(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        self.repository.search(query.trim(), page).await
    }

    async fn invoice_count(&self) -> Result<i64, InvoiceError> {
        self.repository.count().await
    }

    async fn invoice_status_count(&self) -> Result<StatusCount, InvoiceError> {
        self.repository.count_by_status().await
    }

    async fn invoice_pages(&self, query: &str, page: Page) -> Result<PageCount, InvoiceError> {
        let total_count = self.repository.count_matching(query.trim()).await?;
        Ok(PageCount {
            total_count,
            total_pages: page.count_pages(total_count),
        })
    }

    async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, InvoiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(InvoiceError::NotFound(id.to_string()))
    }

    async fn create_invoice(
        &self,
        command: InvoiceCommand,
    ) -> Result<InvoiceWithCustomer, InvoiceError> {
        let invoice = Invoice {
            id: InvoiceId::new(),
            customer_id: command.customer_id,
            amount: command.amount,
            status: command.status,
            date: Utc::now().date_naive(),
        };

        let created = self.repository.create(invoice).await?;
        tracing::info!(
            invoice_id = %created.invoice.id,
            customer_id = %created.invoice.customer_id,
            "Invoice created"
        );

        Ok(created)
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        command: InvoiceCommand,
    ) -> Result<Invoice, InvoiceError> {
        let updated = self.repository.update(id, command).await?;
        tracing::info!(invoice_id = %id, "Invoice updated");
        Ok(updated)
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), InvoiceError> {
        self.repository.delete(id).await?;
        tracing::info!(invoice_id = %id, "Invoice deleted");
        Ok(())
    }
}
