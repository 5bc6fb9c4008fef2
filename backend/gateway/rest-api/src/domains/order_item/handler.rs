// backend/gateway/rest-api/src/domains/order_item/handler.rs

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use pos::domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest};
use pos::grpc::proto;

use crate::context::ApiContext;
use crate::domains::order_item::model::{item_body, list_body, OrderItem};
use crate::error::{ApiError, ApiResult};
use crate::params::{decode_body, parse_id, ListParams};
use crate::response::{ApiListResponse, ApiResponse};

fn wire_list(params: &ListParams) -> proto::FindAllRequest {
    proto::FindAllRequest {
        page: params.page(),
        page_size: params.page_size(),
        search: params.search(),
    }
}

pub async fn find_all(
    State(ctx): State<Arc<ApiContext>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ApiListResponse<OrderItem>>> {
    let mut client = ctx.order_items.clone();
    let reply = client.find_all(wire_list(&params)).await?.into_inner();
    Ok(Json(list_body(reply)))
}

pub async fn find_by_id(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<OrderItem>>> {
    let id = parse_id(&id)?;
    let mut client = ctx.order_items.clone();
    let reply = client
        .find_by_id(proto::FindByIdRequest { id })
        .await?
        .into_inner();
    Ok(Json(item_body(reply)))
}

pub async fn find_by_active(
    State(ctx): State<Arc<ApiContext>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ApiListResponse<OrderItem>>> {
    let mut client = ctx.order_items.clone();
    let reply = client.find_by_active(wire_list(&params)).await?.into_inner();
    Ok(Json(list_body(reply)))
}

pub async fn find_by_trashed(
    State(ctx): State<Arc<ApiContext>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ApiListResponse<OrderItem>>> {
    let mut client = ctx.order_items.clone();
    let reply = client
        .find_by_trashed(wire_list(&params))
        .await?
        .into_inner();
    Ok(Json(list_body(reply)))
}

pub async fn create(
    State(ctx): State<Arc<ApiContext>>,
    payload: Result<Json<CreateOrderItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<OrderItem>>)> {
    let body = decode_body(payload)?;
    body.validate().map_err(ApiError::validation)?;

    let mut client = ctx.order_items.clone();
    let reply = client
        .create(proto::CreateOrderItemRequest::from(&body))
        .await?
        .into_inner();
    Ok((StatusCode::CREATED, Json(item_body(reply))))
}

pub async fn update(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderItemRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<OrderItem>>> {
    let id = parse_id(&id)?;
    let mut body = decode_body(payload)?;
    // L'id du chemin fait foi ; celui du corps est ignoré.
    body.id = id;
    body.validate().map_err(ApiError::validation)?;

    let mut client = ctx.order_items.clone();
    let reply = client
        .update(proto::UpdateOrderItemRequest::from(&body))
        .await?
        .into_inner();
    Ok(Json(item_body(reply)))
}

pub async fn trash(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<OrderItem>>> {
    let id = parse_id(&id)?;
    let mut client = ctx.order_items.clone();
    let reply = client
        .trashed(proto::FindByIdRequest { id })
        .await?
        .into_inner();
    Ok(Json(item_body(reply)))
}

pub async fn restore(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<OrderItem>>> {
    let id = parse_id(&id)?;
    let mut client = ctx.order_items.clone();
    let reply = client
        .restore(proto::FindByIdRequest { id })
        .await?
        .into_inner();
    Ok(Json(item_body(reply)))
}

pub async fn delete_permanent(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<bool>>> {
    let id = parse_id(&id)?;
    let mut client = ctx.order_items.clone();
    let reply = client
        .delete_permanent(proto::FindByIdRequest { id })
        .await?
        .into_inner();
    Ok(Json(reply.into()))
}

pub async fn restore_all(
    State(ctx): State<Arc<ApiContext>>,
) -> ApiResult<Json<ApiResponse<bool>>> {
    let mut client = ctx.order_items.clone();
    let reply = client.restore_all(proto::Empty {}).await?.into_inner();
    Ok(Json(reply.into()))
}

pub async fn delete_all_permanent(
    State(ctx): State<Arc<ApiContext>>,
) -> ApiResult<Json<ApiResponse<bool>>> {
    let mut client = ctx.order_items.clone();
    let reply = client
        .delete_all_permanent(proto::Empty {})
        .await?
        .into_inner();
    Ok(Json(reply.into()))
}
