// backend/gateway/rest-api/src/domains/product/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Product {
    pub id: i32,
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub count_in_stock: i32,
    pub weight: i32,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Product> for Product {
    fn from(wire: proto::Product) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            category_id: wire.category_id,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            count_in_stock: wire.count_in_stock,
            weight: wire.weight,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseProduct) -> ApiResponse<Product> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Product::from),
    }
}

pub fn list_body(reply: proto::ApiResponseProducts) -> ApiListResponse<Product> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Product::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
