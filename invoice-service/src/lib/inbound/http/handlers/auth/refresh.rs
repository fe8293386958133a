use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshHttpRequestBody {
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponseData {
    pub access_token: String,
    pub refresh_token: String,
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshHttpRequestBody>,
) -> Result<ApiSuccess<TokenPairResponseData>, ApiError> {
    let (access_token, refresh_token) = state
        .user_service
        .refresh_token(&body.refresh_token)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenPairResponseData {
            access_token,
            refresh_token,
        },
    ))
}
