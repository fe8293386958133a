use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::InvoiceWithCustomerResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ListQuery;
use crate::inbound::http::router::AppState;

const LATEST_DEFAULT_LIMIT: i64 = 6;
const FILTERED_DEFAULT_LIMIT: i64 = 20;

pub async fn latest_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<InvoiceWithCustomerResponseData>>, ApiError> {
    let page = params.page(LATEST_DEFAULT_LIMIT)?;

    let invoices = state.invoice_service.latest_invoices(page).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        invoices.iter().map(Into::into).collect(),
    ))
}

pub async fn filtered_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<InvoiceWithCustomerResponseData>>, ApiError> {
    let page = params.page(FILTERED_DEFAULT_LIMIT)?;

    let invoices = state
        .invoice_service
        .filtered_invoices(&params.query, page)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        invoices.iter().map(Into::into).collect(),
    ))
}
