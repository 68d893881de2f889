use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::datasource::{KibotClient, PricingClient};

use super::client_handlers::{self, DatabaseState};
use super::handlers;
use super::history_handlers;
use super::openapi::ApiDoc;

/// Create the API router with Swagger UI
///
/// Client store routes are merged only when a database was configured; the
/// service still serves prices and history without one.
pub fn create_router(
    pricing_client: Arc<PricingClient>,
    kibot_client: Arc<KibotClient>,
    database_state: Option<DatabaseState>,
) -> Router {
    let router = Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Pricing pass-through
        .route("/prices", get(handlers::get_prices))
        .with_state(pricing_client);

    // Historical data endpoint
    let history_router = Router::new()
        .route(
            "/api/v1/history/:symbol",
            get(history_handlers::get_history),
        )
        .with_state(kibot_client);

    let router = router.merge(history_router);

    // Conditionally merge client store routes if database is configured
    if let Some(db_state) = database_state {
        let client_router = Router::new()
            .route("/api/v1/clients", post(client_handlers::create_client))
            .route(
                "/api/v1/clients/:client_id",
                get(client_handlers::get_client),
            )
            .route(
                "/api/v1/clients/:client_id",
                put(client_handlers::update_client),
            )
            .route(
                "/api/v1/clients/:client_id",
                delete(client_handlers::delete_client),
            )
            .with_state(db_state);

        router.merge(client_router)
    } else {
        router
    }
}
