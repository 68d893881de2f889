use forex_guru_api::{create_router, KibotClient, PricingClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fallback pricing provider URL (OANDA practice environment)
const DEFAULT_PRICING_URL: &str = "https://api-fxpractice.oanda.com/v3/pricing";

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forex_guru_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create the pricing pass-through client
    let pricing_url =
        std::env::var("PRICING_API_URL").unwrap_or_else(|_| DEFAULT_PRICING_URL.to_string());
    let pricing_token = std::env::var("PRICING_API_TOKEN").ok();
    let pricing_client = Arc::new(PricingClient::new(pricing_url, pricing_token));

    // Create the Kibot history client
    let kibot_client = match std::env::var("KIBOT_BASE_URL") {
        Ok(url) => Arc::new(KibotClient::with_base_url(url)),
        Err(_) => Arc::new(KibotClient::new()),
    };

    // Initialize database (optional - only if DATABASE_URL is set)
    let database_state = initialize_database().await;

    // Create the router with pricing, history, and client store endpoints
    let app = create_router(pricing_client, kibot_client, database_state);

    // Define the address
    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("🚀 Forex Guru API server running on http://{}", addr);
    tracing::info!("📊 Health check: http://{}/health", addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);
    tracing::info!("💱 Prices: http://{}/prices", addr);
    tracing::info!("📈 History: http://{}/api/v1/history/EURUSD", addr);

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Initialize the database pool, run migrations, and build the client store
/// repository
///
/// Returns `None` when DATABASE_URL is unset or the database is unreachable;
/// the server then starts without the client store endpoints.
async fn initialize_database() -> Option<forex_guru_api::DatabaseState> {
    use forex_guru_api::database::{establish_connection_pool, repositories::*, Database};

    let database_url = std::env::var("DATABASE_URL").ok()?;

    tracing::info!("🗄️  Initializing PostgreSQL connection...");

    // Get pool configuration from environment (with default)
    let pool_size = std::env::var("DB_POOL_MAX_SIZE")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10);

    let pool = match establish_connection_pool(&database_url, pool_size) {
        Ok(pool) => {
            tracing::info!("✅ Database connection established successfully");
            pool
        }
        Err(e) => {
            tracing::error!("❌ Failed to establish database connection: {}", e);
            tracing::warn!("⚠️  Server will start without the client store");
            return None;
        }
    };

    let database = Database::new(pool);

    // Apply pending migrations for the client store table
    if let Err(e) = database.run_migrations() {
        tracing::error!("❌ Failed to run migrations: {}", e);
        tracing::warn!("⚠️  Server will start without the client store");
        return None;
    }

    // Create repository
    let db = database.clone();
    let client_repository =
        Arc::new(ClientRepositoryImpl::new(move || db.get_conn())) as Arc<dyn ClientRepository>;

    tracing::info!("✅ Client store integration complete");
    tracing::info!("🔐 Client endpoints available under /api/v1/clients");

    Some(forex_guru_api::DatabaseState { client_repository })
}
