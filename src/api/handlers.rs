use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use crate::datasource::{PricingClient, PricingError};

use super::responses::ErrorResponse;

/// Shared state for the pricing pass-through
pub type PricingState = Arc<PricingClient>;

/// Convert PricingError to HTTP response
impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            PricingError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            PricingError::Status(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "forex-guru-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Get current prices from the upstream provider
///
/// The provider's JSON body is returned verbatim; this service does not
/// shape it.
#[utoipa::path(
    get,
    path = "/prices",
    tag = "Prices",
    responses(
        (status = 200, description = "Provider-shaped pricing payload"),
        (status = 502, description = "Upstream pricing call failed", body = ErrorResponse)
    )
)]
pub async fn get_prices(State(client): State<PricingState>) -> Result<Json<Value>, PricingError> {
    tracing::info!("API Call: /prices");

    let prices = client.get_prices().await.map_err(|e| {
        tracing::error!("Pricing upstream failed: {}", e);
        e
    })?;

    Ok(Json(prices))
}
