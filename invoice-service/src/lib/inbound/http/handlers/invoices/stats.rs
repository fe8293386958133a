use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::invoice::models::PageCount;
use crate::domain::invoice::models::StatusCount;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ListQuery;
use crate::inbound::http::router::AppState;

const PAGES_DEFAULT_LIMIT: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountResponseData {
    pub pending: i64,
    pub paid: i64,
}

impl From<StatusCount> for StatusCountResponseData {
    fn from(count: StatusCount) -> Self {
        Self {
            pending: count.pending,
            paid: count.paid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCountResponseData {
    pub total_count: i64,
    pub total_pages: i64,
}

impl From<PageCount> for PageCountResponseData {
    fn from(count: PageCount) -> Self {
        Self {
            total_count: count.total_count,
            total_pages: count.total_pages,
        }
    }
}

pub async fn invoice_count(State(state): State<AppState>) -> Result<ApiSuccess<i64>, ApiError> {
    let count = state.invoice_service.invoice_count().await?;
    Ok(ApiSuccess::new(StatusCode::OK, count))
}

pub async fn invoice_status_count(
    State(state): State<AppState>,
) -> Result<ApiSuccess<StatusCountResponseData>, ApiError> {
    state
        .invoice_service
        .invoice_status_count()
        .await
        .map_err(ApiError::from)
        .map(|count| ApiSuccess::new(StatusCode::OK, count.into()))
}

pub async fn invoice_pages(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<ApiSuccess<PageCountResponseData>, ApiError> {
    let page = params.page(PAGES_DEFAULT_LIMIT)?;

    state
        .invoice_service
        .invoice_pages(&params.query, page)
        .await
        .map_err(ApiError::from)
        .map(|count| ApiSuccess::new(StatusCode::OK, count.into()))
}
