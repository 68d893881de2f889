use utoipa::OpenApi;

use crate::api::client_handlers;
use crate::api::handlers;
use crate::api::history_handlers;
use crate::api::responses::*;
use crate::database::models::OAuthClient;
use crate::models::{Bar, DailySeries};

/// OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forex Guru API",
        version = "0.1.0",
        description = "A forex pricing proxy, OAuth client store, and historical data fetcher built in Rust",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        handlers::get_prices,
        history_handlers::get_history,
        client_handlers::create_client,
        client_handlers::get_client,
        client_handlers::update_client,
        client_handlers::delete_client,
    ),
    components(
        schemas(
            Bar,
            DailySeries,
            OAuthClient,
            CreateClientRequest,
            UpdateClientRequest,
            DeleteClientResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prices", description = "Live pricing pass-through"),
        (name = "history", description = "Historical daily bar endpoints"),
        (name = "clients", description = "OAuth client store endpoints"),
    )
)]
pub struct ApiDoc;
