// backend/gateway/rest-api/src/domains/order_item/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::OrderItem> for OrderItem {
    fn from(wire: proto::OrderItem) -> Self {
        Self {
            id: wire.id,
            order_id: wire.order_id,
            product_id: wire.product_id,
            quantity: wire.quantity,
            price: wire.price,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseOrderItem) -> ApiResponse<OrderItem> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(OrderItem::from),
    }
}

pub fn list_body(reply: proto::ApiResponseOrderItems) -> ApiListResponse<OrderItem> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(OrderItem::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
