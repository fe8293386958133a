use async_trait::async_trait;

use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceCommand;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceWithCustomer;
use crate::domain::invoice::models::PageCount;
use crate::domain::invoice::models::StatusCount;
use crate::domain::pagination::Page;
use crate::invoice::errors::InvoiceError;

/// Port for invoice listing, search and maintenance.
#[async_trait]
pub trait InvoiceServicePort: Send + Sync + 'static {
    /// Most recent invoices with their customers, newest first.
    async fn latest_invoices(&self, page: Page) -> Result<Vec<InvoiceWithCustomer>, InvoiceError>;

    /// Invoices whose customer name, customer email, amount, date or status
    /// contains `query` (case-insensitive), newest first.
    async fn filtered_invoices(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>, InvoiceError>;

    async fn invoice_count(&self) -> Result<i64, InvoiceError>;

    async fn invoice_status_count(&self) -> Result<StatusCount, InvoiceError>;

    /// Number of matches for `query` and the pages needed at `page.limit()` per page.
    async fn invoice_pages(&self, query: &str, page: Page) -> Result<PageCount, InvoiceError>;

    /// # Errors
    /// * `NotFound` - Invoice does not exist
    async fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice, InvoiceError>;

    /// Create an invoice dated today.
    ///
    /// # Errors
    /// * `CustomerNotFound` - Referenced customer does not exist
    async fn create_invoice(
        &self,
        command: InvoiceCommand,
    ) -> Result<InvoiceWithCustomer, InvoiceError>;

    /// Replace customer, amount and status of an invoice. The date is kept.
    ///
    /// # Errors
    /// * `NotFound` - Invoice does not exist
    /// * `CustomerNotFound` - Referenced customer does not exist
    async fn update_invoice(
        &self,
        id: &InvoiceId,
        command: InvoiceCommand,
    ) -> Result<Invoice, InvoiceError>;

    /// # Errors
    /// * `NotFound` - Invoice does not exist
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), InvoiceError>;
}

/// Persistence operations for invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync + 'static {
    async fn list_latest(&self, page: Page) -> Result<Vec<InvoiceWithCustomer>, InvoiceError>;

    async fn search(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>, InvoiceError>;

    async fn count_matching(&self, query: &str) -> Result<i64, InvoiceError>;

    async fn count(&self) -> Result<i64, InvoiceError>;

    async fn count_by_status(&self) -> Result<StatusCount, InvoiceError>;

    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, InvoiceError>;

    /// # Errors
    /// * `CustomerNotFound` - Referenced customer does not exist
    async fn create(&self, invoice: Invoice) -> Result<InvoiceWithCustomer, InvoiceError>;

    /// # Errors
    /// * `NotFound` - No row was updated
    /// * `CustomerNotFound` - Referenced customer does not exist
    async fn update(&self, id: &InvoiceId, command: InvoiceCommand)
        -> Result<Invoice, InvoiceError>;

    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceError>;
}
