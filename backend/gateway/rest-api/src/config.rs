// backend/gateway/rest-api/src/config.rs

use std::net::SocketAddr;

/// Configuration de la gateway, lue de l'environnement avec des valeurs
/// par défaut utilisables en local.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub http_addr: SocketAddr,
    pub rpc_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let port = std::env::var("PORT").unwrap_or_else(|_| "4000".to_string());
        let rpc_url =
            std::env::var("POS_RPC_URL").unwrap_or_else(|_| "http://[::1]:50051".to_string());

        Ok(Self {
            http_addr: format!("0.0.0.0:{port}").parse()?,
            rpc_url,
        })
    }
}
