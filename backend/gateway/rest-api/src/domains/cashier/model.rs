// backend/gateway/rest-api/src/domains/cashier/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Cashier {
    pub id: i32,
    pub merchant_id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Cashier> for Cashier {
    fn from(wire: proto::Cashier) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            name: wire.name,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseCashier) -> ApiResponse<Cashier> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Cashier::from),
    }
}

pub fn list_body(reply: proto::ApiResponseCashiers) -> ApiListResponse<Cashier> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Cashier::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
