//! Admin Dashboard Endpoints
//!
//! Analytics snapshot and the menu QR code image.

use crate::models::{DailyAnalytics, QrCodeResponse};

use super::{get_json, ApiError};

/// GET /analytics/daily: today's order count and revenue
pub async fn fetch_daily_analytics(base: &str, token: &str) -> Result<DailyAnalytics, ApiError> {
    get_json(&format!("{}/analytics/daily", base), Some(token)).await
}

/// GET /qrcode: data-URL image pointing customers at the menu
pub async fn fetch_qr_code(base: &str, token: &str) -> Result<QrCodeResponse, ApiError> {
    get_json(&format!("{}/qrcode", base), Some(token)).await
}
