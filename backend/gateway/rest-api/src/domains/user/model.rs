// backend/gateway/rest-api/src/domains/user/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

// Pas de champ mot de passe : il n'existe déjà plus côté wire.
#[derive(Debug, Serialize)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::User> for User {
    fn from(wire: proto::User) -> Self {
        Self {
            id: wire.id,
            firstname: wire.firstname,
            lastname: wire.lastname,
            email: wire.email,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseUser) -> ApiResponse<User> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(User::from),
    }
}

pub fn list_body(reply: proto::ApiResponseUsers) -> ApiListResponse<User> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(User::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
