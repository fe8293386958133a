use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::InvoiceId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let invoice_id = InvoiceId::from_string(&invoice_id).map_err(InvoiceError::from)?;

    state.invoice_service.delete_invoice(&invoice_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
