use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::InvoiceHttpRequestBody;
use super::InvoiceWithCustomerResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_invoice(
    State(state): State<AppState>,
    Json(body): Json<InvoiceHttpRequestBody>,
) -> Result<ApiSuccess<InvoiceWithCustomerResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .invoice_service
        .create_invoice(command)
        .await
        .map_err(ApiError::from)
        .map(|ref created| ApiSuccess::new(StatusCode::CREATED, created.into()))
}
