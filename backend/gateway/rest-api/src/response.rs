// backend/gateway/rest-api/src/response.rs
//
// Enveloppes JSON de la gateway. Le couple `status`/`message` est repris
// tel quel de la réponse wire ; une liste vide se sérialise en `[]`,
// jamais en null.

use pos::grpc::mappers::from_timestamp;
use pos::grpc::proto;
use prost_types::Timestamp;
use serde::Serialize;
use shared_kernel::pagination::PaginationMeta;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub struct ApiListResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl From<proto::ApiResponseDelete> for ApiResponse<bool> {
    fn from(reply: proto::ApiResponseDelete) -> Self {
        Self {
            status: reply.status,
            message: reply.message,
            data: Some(reply.success),
        }
    }
}

impl From<proto::ApiResponseAll> for ApiResponse<bool> {
    fn from(reply: proto::ApiResponseAll) -> Self {
        Self {
            status: reply.status,
            message: reply.message,
            data: Some(reply.success),
        }
    }
}

/// Timestamp wire → RFC 3339. Un timestamp absent ou hors bornes devient
/// une chaîne vide plutôt qu'une erreur : la réponse est déjà acquise.
pub fn fmt_timestamp(ts: Option<&Timestamp>) -> String {
    ts.and_then(|t| from_timestamp(t).ok())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

pub fn fmt_timestamp_opt(ts: Option<&Timestamp>) -> Option<String> {
    ts.and_then(|t| from_timestamp(t).ok())
        .map(|dt| dt.to_rfc3339())
}

pub fn pagination_of(wire: Option<proto::Pagination>) -> Option<PaginationMeta> {
    wire.map(PaginationMeta::from)
}
