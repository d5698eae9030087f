//! Auth Endpoint

use crate::models::{LoginRequest, LoginResponse};

use super::{send_json, ApiError};

/// POST /auth/login: exchange credentials for a bearer token
pub async fn login(base: &str, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    send_json("POST", &format!("{}/auth/login", base), None, &payload).await
}
