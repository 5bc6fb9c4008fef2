// crates/pos/src/grpc/mappers/auth_mapper.rs

use crate::domain::auth::TokenPair;
use crate::domain::requests::{LoginRequest, RefreshTokenRequest};
use crate::grpc::proto;

impl From<&TokenPair> for proto::TokenPair {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
        }
    }
}

impl From<proto::TokenPair> for TokenPair {
    fn from(wire: proto::TokenPair) -> Self {
        Self {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
        }
    }
}

impl From<proto::LoginRequest> for LoginRequest {
    fn from(wire: proto::LoginRequest) -> Self {
        Self {
            email: wire.email,
            password: wire.password,
        }
    }
}

impl From<&LoginRequest> for proto::LoginRequest {
    fn from(req: &LoginRequest) -> Self {
        Self {
            email: req.email.clone(),
            password: req.password.clone(),
        }
    }
}

impl From<proto::RefreshTokenRequest> for RefreshTokenRequest {
    fn from(wire: proto::RefreshTokenRequest) -> Self {
        Self {
            refresh_token: wire.refresh_token,
        }
    }
}

impl From<&RefreshTokenRequest> for proto::RefreshTokenRequest {
    fn from(req: &RefreshTokenRequest) -> Self {
        Self {
            refresh_token: req.refresh_token.clone(),
        }
    }
}
