// backend/gateway/rest-api/src/domains/auth/handler.rs

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use pos::domain::requests::{LoginRequest, RefreshTokenRequest};
use pos::grpc::proto;

use crate::context::ApiContext;
use crate::domains::auth::model::{login_body, TokenPair};
use crate::error::{ApiError, ApiResult};
use crate::params::decode_body;
use crate::response::ApiResponse;

pub async fn login(
    State(ctx): State<Arc<ApiContext>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<TokenPair>>> {
    let body = decode_body(payload)?;
    body.validate().map_err(ApiError::validation)?;

    let mut client = ctx.auth.clone();
    let reply = client
        .login(proto::LoginRequest::from(&body))
        .await?
        .into_inner();
    Ok(Json(login_body(reply)))
}

pub async fn refresh(
    State(ctx): State<Arc<ApiContext>>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<TokenPair>>> {
    let body = decode_body(payload)?;
    body.validate().map_err(ApiError::validation)?;

    let mut client = ctx.auth.clone();
    let reply = client
        .refresh_token(proto::RefreshTokenRequest::from(&body))
        .await?
        .into_inner();
    Ok(Json(login_body(reply)))
}
