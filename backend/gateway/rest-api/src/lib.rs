// backend/gateway/rest-api/src/lib.rs

pub mod config;
pub mod context;
pub mod domains;
pub mod error;
pub mod params;
pub mod response;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::context::ApiContext;

async fn health() -> &'static str {
    "ok"
}

/// Assemble le routeur complet de la gateway sur un contexte donné.
pub fn app(context: Arc<ApiContext>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", domains::auth::routes())
        .nest("/api/cashier", domains::cashier::routes())
        .nest("/api/category", domains::category::routes())
        .nest("/api/merchant", domains::merchant::routes())
        .nest("/api/order", domains::order::routes())
        .nest("/api/order-item", domains::order_item::routes())
        .nest("/api/product", domains::product::routes())
        .nest("/api/role", domains::role::routes())
        .nest("/api/transaction", domains::transaction::routes())
        .nest("/api/user", domains::user::routes())
        .with_state(context)
}
