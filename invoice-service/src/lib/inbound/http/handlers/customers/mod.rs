use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::customer::models::CustomerRef;
use crate::domain::customer::models::CustomerSummary;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ListQuery;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRefResponseData {
    pub id: String,
    pub name: String,
}

impl From<&CustomerRef> for CustomerRefResponseData {
    fn from(customer: &CustomerRef) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummaryResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

impl From<&CustomerSummary> for CustomerSummaryResponseData {
    fn from(customer: &CustomerSummary) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            image_url: customer.image_url.clone(),
            total_invoices: customer.total_invoices,
            total_pending: customer.total_pending,
            total_paid: customer.total_paid,
        }
    }
}

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerRefResponseData>>, ApiError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        customers.iter().map(Into::into).collect(),
    ))
}

pub async fn filtered_customers(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<ApiSuccess<Vec<CustomerSummaryResponseData>>, ApiError> {
    let customers = state
        .customer_service
        .filtered_customers(&params.query)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        customers.iter().map(Into::into).collect(),
    ))
}

pub async fn customer_count(State(state): State<AppState>) -> Result<ApiSuccess<i64>, ApiError> {
    let count = state.customer_service.customer_count().await?;
    Ok(ApiSuccess::new(StatusCode::OK, count))
}
