// backend/gateway/rest-api/src/domains/auth/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<proto::TokenPair> for TokenPair {
    fn from(wire: proto::TokenPair) -> Self {
        Self {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
        }
    }
}

pub fn login_body(reply: proto::ApiResponseLogin) -> ApiResponse<TokenPair> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(TokenPair::from),
    }
}
