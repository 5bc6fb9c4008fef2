// backend/gateway/rest-api/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_kernel::errors::ErrorBody;
use tonic::Code;

pub type ApiResult<T> = Result<T, ApiError>;

/// Erreur HTTP structurée : un statut et l'enveloppe `{status, message, code}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::new(message, status.as_u16()),
        }
    }

    /// Rejet gateway : la requête n'atteint jamais le tier RPC.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Échec de validation sémantique d'un corps décodé.
    pub fn validation(cause: impl std::fmt::Display) -> Self {
        Self::bad_request(format!("validation error: {cause}"))
    }
}

impl From<tonic::Status> for ApiError {
    fn from(status: tonic::Status) -> Self {
        let http = match status.code() {
            Code::InvalidArgument => StatusCode::BAD_REQUEST,
            Code::NotFound => StatusCode::NOT_FOUND,
            Code::AlreadyExists => StatusCode::CONFLICT,
            Code::Unauthenticated => StatusCode::UNAUTHORIZED,
            Code::PermissionDenied => StatusCode::FORBIDDEN,
            // 500 par défaut : le détail technique reste côté serveur.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if http == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = ?status.code(), message = %status.message(), "rpc failure");
        }

        Self::new(http, status.message().to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_401() {
        let err = ApiError::from(tonic::Status::unauthenticated("invalid email or password"));
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.body.code, 401);
    }

    #[test]
    fn unknown_codes_default_to_500() {
        let err = ApiError::from(tonic::Status::unavailable("backend down"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_carries_the_error_envelope() {
        let err = ApiError::bad_request("id must be a positive integer");
        assert_eq!(err.body.status, "error");
        assert_eq!(err.body.code, 400);
    }
}
