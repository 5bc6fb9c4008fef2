// backend/gateway/rest-api/src/domains/category/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Category> for Category {
    fn from(wire: proto::Category) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseCategory) -> ApiResponse<Category> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Category::from),
    }
}

pub fn list_body(reply: proto::ApiResponseCategories) -> ApiListResponse<Category> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Category::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
