use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Pricing upstream errors, surfaced to the caller as a declared condition
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("upstream pricing request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream pricing provider returned {0}")]
    Status(StatusCode),
}

/// Client for the external pricing provider
///
/// The provider's JSON body is passed through untouched; this service does
/// not shape or validate it. No retry and no fallback on failure.
pub struct PricingClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl PricingClient {
    /// Create a pricing client for the given provider URL
    ///
    /// The token, when present, is sent as a bearer credential.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_token,
        }
    }

    /// Fetch current prices from the upstream provider
    pub async fn get_prices(&self) -> Result<Value, PricingError> {
        let mut request = self.client.get(&self.base_url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(PricingError::Status(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PricingError::Status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.to_string(),
            "upstream pricing provider returned 401 Unauthorized"
        );
    }
}
