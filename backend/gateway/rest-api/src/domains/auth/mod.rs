// backend/gateway/rest-api/src/domains/auth/mod.rs

mod handler;
mod model;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use crate::context::ApiContext;

pub fn routes() -> Router<Arc<ApiContext>> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/refresh", post(handler::refresh))
}
