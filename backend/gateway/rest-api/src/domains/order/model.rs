// backend/gateway/rest-api/src/domains/order/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Order {
    pub id: i32,
    pub merchant_id: i32,
    pub cashier_id: i32,
    pub total_price: i64,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Order> for Order {
    fn from(wire: proto::Order) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            cashier_id: wire.cashier_id,
            total_price: wire.total_price,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseOrder) -> ApiResponse<Order> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Order::from),
    }
}

pub fn list_body(reply: proto::ApiResponseOrders) -> ApiListResponse<Order> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Order::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
