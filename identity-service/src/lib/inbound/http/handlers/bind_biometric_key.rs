use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn bind_biometric_key(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<BindBiometricKeyRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    if body.biometric_key.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Biometric key must not be empty".to_string(),
        ));
    }

    state
        .auth_service
        .bind_biometric_key(&caller.user.id, &body.biometric_key)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindBiometricKeyRequest {
    biometric_key: String,
}
