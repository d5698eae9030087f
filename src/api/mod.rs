//! REST API Bindings
//!
//! Thin wrappers over the browser fetch API, organized by domain. Every
//! backend failure is mapped onto [`ApiError`] so call sites can react to
//! the taxonomy (401 → forced logout, 404 → non-fatal, rest → toast).

mod admin;
mod auth;
mod menu;
mod order;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use admin::*;
pub use auth::*;
pub use menu::*;
pub use order::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from a protected call; the session is over
    #[error("authorization failed")]
    Unauthorized,
    /// 404 on a lookup
    #[error("resource not found")]
    NotFound,
    /// Any other non-2xx response
    #[error("server error (status {0})")]
    Server(u16),
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not what the backend contract promises
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Issue a request and return the response body on 2xx.
///
/// `token` adds a bearer Authorization header; `body` is sent as JSON.
async fn request(
    method: &str,
    url: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("not a Response".to_string()))?;

    match response.status() {
        401 => return Err(ApiError::Unauthorized),
        404 => return Err(ApiError::NotFound),
        status if !response.ok() => return Err(ApiError::Server(status)),
        _ => {}
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    Ok(text.as_string().unwrap_or_default())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, ApiError> {
    let body = request("GET", url, token, None).await?;
    decode(&body)
}

async fn send_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    token: Option<&str>,
    payload: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    let body = request(method, url, token, Some(body)).await?;
    decode(&body)
}

async fn delete(url: &str, token: Option<&str>) -> Result<(), ApiError> {
    request("DELETE", url, token, None).await.map(|_| ())
}
