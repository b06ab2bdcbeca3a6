use std::sync::Arc;

use storefront_client::{
    ApiGateway, HttpTransport,
    config::{ClientConfig, Env},
    transport::TransportState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// A connectivity probe for the configured storefront service: loads the
/// configuration, builds the real transport, fetches the first catalog page,
/// and exits non-zero if the service cannot be reached. Useful as a smoke
/// check for deployments and as a template for embedding the client.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = ClientConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment
    // variable, falling back to a sensible default for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storefront_client=debug".into());

    // 3. Initialize Logging based on Environment
    // Pretty output for humans locally, JSON for log aggregators in
    // production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Storefront client starting in {:?} mode", config.env);
    tracing::info!("Target service: {}", config.api_base_url);

    // 4. Transport & Gateway Assembly
    let transport = HttpTransport::new(&config)
        .expect("FATAL: Failed to construct the HTTP transport. Check STOREFRONT_API_URL.");
    let gateway = ApiGateway::new(Arc::new(transport) as TransportState);

    // 5. Probe
    // One unauthenticated catalog fetch tells us whether the base URL is
    // right and the service is up.
    match gateway.products(None).await {
        Ok(page) => {
            tracing::info!(
                total = page.total,
                page = page.page,
                "storefront service reachable"
            );
        }
        Err(error) => {
            tracing::error!(error = %error, "storefront service probe failed");
            std::process::exit(1);
        }
    }
}
