// backend/gateway/rest-api/src/domains/category/mod.rs

mod handler;
mod model;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::context::ApiContext;

pub fn routes() -> Router<Arc<ApiContext>> {
    Router::new()
        .route("/", get(handler::find_all))
        .route("/active", get(handler::find_by_active))
        .route("/trashed", get(handler::find_by_trashed))
        .route("/{id}", get(handler::find_by_id))
        .route("/create", post(handler::create))
        .route("/update/{id}", post(handler::update))
        .route("/trashed/{id}", post(handler::trash))
        .route("/restore/all", post(handler::restore_all))
        .route("/restore/{id}", post(handler::restore))
        .route("/permanent/all", post(handler::delete_all_permanent))
        .route("/permanent/{id}", delete(handler::delete_permanent))
}
