use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::InvoiceResponseData;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::InvoiceId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<ApiSuccess<InvoiceResponseData>, ApiError> {
    let invoice_id = InvoiceId::from_string(&invoice_id).map_err(InvoiceError::from)?;

    state
        .invoice_service
        .get_invoice(&invoice_id)
        .await
        .map_err(ApiError::from)
        .map(|ref invoice| ApiSuccess::new(StatusCode::OK, invoice.into()))
}
