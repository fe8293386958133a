use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::InvoiceHttpRequestBody;
use super::InvoiceResponseData;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::InvoiceId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    Json(body): Json<InvoiceHttpRequestBody>,
) -> Result<ApiSuccess<InvoiceResponseData>, ApiError> {
    let invoice_id = InvoiceId::from_string(&invoice_id).map_err(InvoiceError::from)?;
    let command = body.try_into_command()?;

    state
        .invoice_service
        .update_invoice(&invoice_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref invoice| ApiSuccess::new(StatusCode::OK, invoice.into()))
}
