use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::datasource::KibotClient;
use crate::models::DailySeries;
use crate::utils::validation;

/// Shared state for history handlers
pub type HistoryState = Arc<KibotClient>;

/// Get the daily series for a currency pair
///
/// Covers the trailing 365 days. An unreachable upstream and an unparseable
/// response body both answer 404; the two cases are not distinguished.
#[utoipa::path(
    get,
    path = "/api/v1/history/{symbol}",
    tag = "history",
    params(
        ("symbol" = String, Path, description = "Currency pair (e.g., EURUSD)")
    ),
    responses(
        (status = 200, description = "Daily bars in upstream order", body = DailySeries),
        (status = 400, description = "Invalid symbol"),
        (status = 404, description = "No data available")
    )
)]
pub async fn get_history(
    State(client): State<HistoryState>,
    Path(symbol): Path<String>,
) -> Result<Json<DailySeries>, (StatusCode, String)> {
    tracing::info!("API Call: /api/v1/history/{}", symbol);

    if !validation::is_valid_symbol(&symbol) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Invalid symbol: {}", symbol),
        ));
    }

    match client.fetch_daily_series(&symbol).await {
        Some(series) => Ok(Json(series)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("No data available for {}", symbol),
        )),
    }
}
