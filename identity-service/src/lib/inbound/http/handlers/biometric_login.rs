use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn biometric_login(
    State(state): State<AppState>,
    Json(body): Json<BiometricLoginRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    if body.biometric_key.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Biometric key must not be empty".to_string(),
        ));
    }

    state
        .auth_service
        .biometric_login(&body.biometric_key)
        .await
        .map_err(ApiError::from)
        .map(|ref payload| ApiSuccess::new(StatusCode::OK, payload.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BiometricLoginRequest {
    biometric_key: String,
}
