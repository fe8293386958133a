use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::revenue::models::Revenue;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueResponseData {
    pub month: String,
    pub revenue: i64,
}

impl From<&Revenue> for RevenueResponseData {
    fn from(revenue: &Revenue) -> Self {
        Self {
            month: revenue.month.clone(),
            revenue: revenue.revenue,
        }
    }
}

pub async fn list_revenues(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RevenueResponseData>>, ApiError> {
    let revenues = state.revenue_service.list_revenues().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        revenues.iter().map(Into::into).collect(),
    ))
}
