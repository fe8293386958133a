use serde::Deserialize;
use serde::Serialize;

use crate::domain::customer::models::CustomerId;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::Amount;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceCommand;
use crate::domain::invoice::models::InvoiceStatus;
use crate::domain::invoice::models::InvoiceWithCustomer;

pub mod create_invoice;
pub mod delete_invoice;
pub mod get_invoice;
pub mod list_invoices;
pub mod stats;
pub mod update_invoice;

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceHttpRequestBody {
    #[serde(default)]
    customer_id: String,
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    status: String,
}

impl InvoiceHttpRequestBody {
    fn try_into_command(self) -> Result<InvoiceCommand, InvoiceError> {
        if self.customer_id.trim().is_empty() {
            return Err(InvoiceError::InvalidCustomerId(
                "customer_id is required".to_string(),
            ));
        }
        let customer_id = CustomerId::from_string(self.customer_id.trim())
            .map_err(|e| InvoiceError::InvalidCustomerId(e.to_string()))?;
        let amount = Amount::new(self.amount)?;
        let status = self.status.parse::<InvoiceStatus>()?;

        Ok(InvoiceCommand {
            customer_id,
            amount,
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceResponseData {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
    pub date: String,
}

impl From<&Invoice> for InvoiceResponseData {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            customer_id: invoice.customer_id.to_string(),
            amount: invoice.amount.value(),
            status: invoice.status.to_string(),
            date: invoice.date.to_string(),
        }
    }
}

/// Invoice row enriched with customer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceWithCustomerResponseData {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: i64,
    pub status: String,
    pub date: String,
}

impl From<&InvoiceWithCustomer> for InvoiceWithCustomerResponseData {
    fn from(row: &InvoiceWithCustomer) -> Self {
        Self {
            id: row.invoice.id.to_string(),
            customer_id: row.invoice.customer_id.to_string(),
            name: row.customer.name.clone(),
            email: row.customer.email.clone(),
            image_url: row.customer.image_url.clone(),
            amount: row.invoice.amount.value(),
            status: row.invoice.status.to_string(),
            date: row.invoice.date.to_string(),
        }
    }
}
