use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::customer::models::CustomerId;
use crate::invoice::errors::AmountError;
use crate::invoice::errors::InvoiceIdError;
use crate::invoice::errors::InvoiceStatusError;

/// Invoice as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: Amount,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Customer fields shown next to an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCustomer {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Invoice joined with its customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceWithCustomer {
    pub invoice: Invoice,
    pub customer: InvoiceCustomer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, InvoiceIdError> {
        Uuid::parse_str(s)
            .map(InvoiceId)
            .map_err(|e| InvoiceIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Invoice amount in minor currency units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Result<Self, AmountError> {
        if value <= 0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(InvoiceStatusError::Empty),
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(InvoiceStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of invoices in each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCount {
    pub pending: i64,
    pub paid: i64,
}

/// Size of a filtered result set in items and in pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount {
    pub total_count: i64,
    pub total_pages: i64,
}

/// Fields accepted when creating or replacing an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceCommand {
    pub customer_id: CustomerId,
    pub amount: Amount,
    pub status: InvoiceStatus,
}
