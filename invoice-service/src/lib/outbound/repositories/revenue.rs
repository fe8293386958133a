use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::revenue::models::Revenue;
use crate::domain::revenue::ports::RevenueRepository;
use crate::revenue::errors::RevenueError;

pub struct PostgresRevenueRepository {
    pool: PgPool,
}

impl PostgresRevenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RevenueRow {
    month: String,
    revenue: i64,
}

#[async_trait]
impl RevenueRepository for PostgresRevenueRepository {
    async fn list_all(&self) -> Result<Vec<Revenue>, RevenueError> {
        let rows = sqlx::query_as::<_, RevenueRow>(
            r#"
            SELECT month, revenue
            FROM revenue
            ORDER BY array_position(
                ARRAY['Jan','Feb','Mar','Apr','May','Jun','Jul','Aug','Sep','Oct','Nov','Dec']::text[],
                month::text
            )
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RevenueError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| Revenue {
                month: r.month,
                revenue: r.revenue,
            })
            .collect())
    }
}
