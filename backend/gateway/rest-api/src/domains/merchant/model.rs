// backend/gateway/rest-api/src/domains/merchant/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Merchant {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub api_key: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Merchant> for Merchant {
    fn from(wire: proto::Merchant) -> Self {
        Self {
            id: wire.id,
            user_id: wire.user_id,
            name: wire.name,
            api_key: wire.api_key,
            status: wire.status,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseMerchant) -> ApiResponse<Merchant> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Merchant::from),
    }
}

pub fn list_body(reply: proto::ApiResponseMerchants) -> ApiListResponse<Merchant> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Merchant::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
