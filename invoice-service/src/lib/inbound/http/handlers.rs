use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::customer::errors::CustomerError;
use crate::domain::pagination::Page;
use crate::invoice::errors::InvoiceError;
use crate::revenue::errors::RevenueError;
use crate::user::errors::UserError;

pub mod auth;
pub mod customers;
pub mod invoices;
pub mod revenues;
pub mod users;

/// Successful response: status code plus the JSON payload as the whole body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorData { error: message })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials | UserError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::BadRequest(err.to_string()),
            UserError::Credential(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<InvoiceError> for ApiError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::NotFound(_) => ApiError::NotFound(err.to_string()),
            InvoiceError::CustomerNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            InvoiceError::InvalidId(_)
            | InvoiceError::InvalidCustomerId(_)
            | InvoiceError::InvalidAmount(_)
            | InvoiceError::InvalidStatus(_)
            | InvoiceError::InvalidPage(_) => ApiError::BadRequest(err.to_string()),
            InvoiceError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<RevenueError> for ApiError {
    fn from(err: RevenueError) -> Self {
        match err {
            RevenueError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Liveness check.
pub async fn health() -> &'static str {
    "OK"
}

/// Raw pagination and search parameters.
///
/// Values that are missing or not integers fall back to defaults; integers
/// outside the allowed range are rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    offset: Option<String>,
    limit: Option<String>,
    #[serde(default)]
    pub query: String,
}

impl ListQuery {
    pub fn page(&self, default_limit: i64) -> Result<Page, InvoiceError> {
        let offset = parse_or(self.offset.as_deref(), 0);
        let limit = parse_or(self.limit.as_deref(), default_limit);
        Ok(Page::new(offset, limit)?)
    }
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
