// backend/gateway/rest-api/src/domains/role/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Role> for Role {
    fn from(wire: proto::Role) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseRole) -> ApiResponse<Role> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Role::from),
    }
}

pub fn list_body(reply: proto::ApiResponseRoles) -> ApiListResponse<Role> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Role::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
