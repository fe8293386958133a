use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::contains_pattern;
use crate::domain::customer::models::CustomerId;
use crate::domain::invoice::models::Amount;
use crate::domain::invoice::models::Invoice;
use crate::domain::invoice::models::InvoiceCommand;
use crate::domain::invoice::models::InvoiceCustomer;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::models::InvoiceStatus;
use crate::domain::invoice::models::InvoiceWithCustomer;
use crate::domain::invoice::models::StatusCount;
use crate::domain::invoice::ports::InvoiceRepository;
use crate::domain::pagination::Page;
use crate::invoice::errors::InvoiceError;

const SELECT_WITH_CUSTOMER: &str = r#"
    SELECT i.id, i.customer_id, i.amount, i.status, i.date,
           c.name AS customer_name, c.email AS customer_email, c.image_url AS customer_image_url
    FROM invoices i
    JOIN customers c ON c.id = i.customer_id
"#;

const MATCHES_QUERY: &str = r#"
    WHERE c.name ILIKE $1
       OR c.email ILIKE $1
       OR i.amount::text ILIKE $1
       OR i.date::text ILIKE $1
       OR i.status ILIKE $1
"#;

pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct InvoiceRow {
    id: Uuid,
    customer_id: Uuid,
    amount: i64,
    status: String,
    date: NaiveDate,
}

#[derive(FromRow)]
struct InvoiceWithCustomerRow {
    #[sqlx(flatten)]
    invoice: InvoiceRow,
    customer_name: String,
    customer_email: String,
    customer_image_url: String,
}

#[derive(FromRow)]
struct StatusCountRow {
    pending: i64,
    paid: i64,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = InvoiceError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |e: &dyn fmt::Display| {
            InvoiceError::DatabaseError(format!("Corrupt invoice row {}: {}", id, e))
        };

        Ok(Invoice {
            id: InvoiceId(row.id),
            customer_id: CustomerId(row.customer_id),
            amount: Amount::new(row.amount).map_err(|e| corrupt(&e))?,
            status: row
                .status
                .parse::<InvoiceStatus>()
                .map_err(|e| corrupt(&e))?,
            date: row.date,
        })
    }
}

impl TryFrom<InvoiceWithCustomerRow> for InvoiceWithCustomer {
    type Error = InvoiceError;

    fn try_from(row: InvoiceWithCustomerRow) -> Result<Self, Self::Error> {
        Ok(InvoiceWithCustomer {
            invoice: row.invoice.try_into()?,
            customer: InvoiceCustomer {
                name: row.customer_name,
                email: row.customer_email,
                image_url: row.customer_image_url,
            },
        })
    }
}

fn database_error(e: sqlx::Error) -> InvoiceError {
    InvoiceError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, customer_id: &CustomerId) -> InvoiceError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return InvoiceError::CustomerNotFound(customer_id.to_string());
        }
    }
    database_error(e)
}

fn collect(rows: Vec<InvoiceWithCustomerRow>) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
    rows.into_iter().map(InvoiceWithCustomer::try_from).collect()
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn list_latest(&self, page: Page) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        let sql = format!(
            "{} ORDER BY i.date DESC, i.id LIMIT $1 OFFSET $2",
            SELECT_WITH_CUSTOMER
        );
        let rows = sqlx::query_as::<_, InvoiceWithCustomerRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        collect(rows)
    }

    async fn search(
        &self,
        query: &str,
        page: Page,
    ) -> Result<Vec<InvoiceWithCustomer>, InvoiceError> {
        let sql = format!(
            "{} {} ORDER BY i.date DESC, i.id LIMIT $2 OFFSET $3",
            SELECT_WITH_CUSTOMER, MATCHES_QUERY
        );
        let rows = sqlx::query_as::<_, InvoiceWithCustomerRow>(&sql)
            .bind(contains_pattern(query))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        collect(rows)
    }

    async fn count_matching(&self, query: &str) -> Result<i64, InvoiceError> {
        let sql = format!(
            "SELECT COUNT(*) FROM invoices i JOIN customers c ON c.id = i.customer_id {}",
            MATCHES_QUERY
        );
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(contains_pattern(query))
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count(&self) -> Result<i64, InvoiceError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn count_by_status(&self) -> Result<StatusCount, InvoiceError> {
        let row = sqlx::query_as::<_, StatusCountRow>(
            r#"
            SELECT COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                   COUNT(*) FILTER (WHERE status = 'paid') AS paid
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(StatusCount {
            pending: row.pending,
            paid: row.paid,
        })
    }

    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, InvoiceError> {
        sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Invoice::try_from)
        .transpose()
    }

    async fn create(&self, invoice: Invoice) -> Result<InvoiceWithCustomer, InvoiceError> {
        let row = sqlx::query_as::<_, InvoiceWithCustomerRow>(
            r#"
            WITH i AS (
                INSERT INTO invoices (id, customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, customer_id, amount, status, date
            )
            SELECT i.id, i.customer_id, i.amount, i.status, i.date,
                   c.name AS customer_name, c.email AS customer_email,
                   c.image_url AS customer_image_url
            FROM i
            JOIN customers c ON c.id = i.customer_id
            "#,
        )
        .bind(invoice.id.0)
        .bind(invoice.customer_id.0)
        .bind(invoice.amount.value())
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &invoice.customer_id))?;

        row.try_into()
    }

    async fn update(
        &self,
        id: &InvoiceId,
        command: InvoiceCommand,
    ) -> Result<Invoice, InvoiceError> {
        sqlx::query_as::<_, InvoiceRow>(
            r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            RETURNING id, customer_id, amount, status, date
            "#,
        )
        .bind(id.0)
        .bind(command.customer_id.0)
        .bind(command.amount.value())
        .bind(command.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &command.customer_id))?
        .ok_or_else(|| InvoiceError::NotFound(id.to_string()))?
        .try_into()
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(InvoiceError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
