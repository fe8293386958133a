use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::contains_pattern;
use crate::customer::errors::CustomerError;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::CustomerRef;
use crate::domain::customer::models::CustomerSummary;
use crate::domain::customer::ports::CustomerRepository;

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CustomerRefRow {
    id: Uuid,
    name: String,
}

#[derive(FromRow)]
struct CustomerSummaryRow {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: i64,
    total_paid: i64,
}

impl From<CustomerSummaryRow> for CustomerSummary {
    fn from(row: CustomerSummaryRow) -> Self {
        Self {
            id: CustomerId(row.id),
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: row.total_pending,
            total_paid: row.total_paid,
        }
    }
}

fn database_error(e: sqlx::Error) -> CustomerError {
    CustomerError::DatabaseError(e.to_string())
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn list_all(&self) -> Result<Vec<CustomerRef>, CustomerError> {
        let rows = sqlx::query_as::<_, CustomerRefRow>(
            "SELECT id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|r| CustomerRef {
                id: CustomerId(r.id),
                name: r.name,
            })
            .collect())
    }

    async fn search_with_totals(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerSummary>, CustomerError> {
        let rows = sqlx::query_as::<_, CustomerSummaryRow>(
            r#"
            SELECT c.id, c.name, c.email, c.image_url,
                   COUNT(i.id) AS total_invoices,
                   COALESCE(SUM(CASE WHEN i.status = 'pending' THEN i.amount ELSE 0 END), 0)::BIGINT AS total_pending,
                   COALESCE(SUM(CASE WHEN i.status = 'paid' THEN i.amount ELSE 0 END), 0)::BIGINT AS total_paid
            FROM customers c
            LEFT JOIN invoices i ON i.customer_id = c.id
            WHERE c.name ILIKE $1 OR c.email ILIKE $1
            GROUP BY c.id, c.name, c.email, c.image_url
            ORDER BY c.name ASC
            "#,
        )
        .bind(contains_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }

    async fn count(&self) -> Result<i64, CustomerError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }
}
