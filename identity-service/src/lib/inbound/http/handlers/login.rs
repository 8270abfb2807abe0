use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    // An unparseable email cannot belong to any account; collapse it into
    // the uniform credential failure.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let payload = state
        .auth_service
        .login(&email, &body.password)
        .await
        .map_err(|e| match e {
            // Unknown email and wrong password produce the same response,
            // so the endpoint cannot be used to enumerate accounts.
            AuthError::NotFound(_) | AuthError::InvalidCredential => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, (&payload).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
