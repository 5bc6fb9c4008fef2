// backend/gateway/rest-api/src/main.rs

use std::sync::Arc;

use rest_api::config::GatewayConfig;
use rest_api::context::ApiContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Configuration et connexion au serveur RPC
    let config = GatewayConfig::from_env()?;
    let context = Arc::new(ApiContext::connect(&config.rpc_url).await?);

    // 2. Assemblage du routeur et écoute HTTP
    let app = rest_api::app(context);

    tracing::info!(addr = %config.http_addr, "rest gateway listening");
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
