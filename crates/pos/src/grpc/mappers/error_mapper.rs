// crates/pos/src/grpc/mappers/error_mapper.rs

use shared_kernel::errors::DomainError;
use tonic::Status;

pub fn status_from_domain(error: DomainError) -> Status {
    match error {
        DomainError::Validation { .. } => Status::invalid_argument(error.to_string()),
        DomainError::NotFound { .. } => Status::not_found(error.to_string()),
        DomainError::AlreadyExists { .. } => Status::already_exists(error.to_string()),
        DomainError::Unauthorized { reason } => Status::unauthenticated(reason),
        // Le détail technique est loggé, pas exposé au client.
        DomainError::Internal(detail) => {
            tracing::error!(%detail, "domain service failure");
            Status::internal("internal error")
        }
    }
}

pub trait IntoGrpcStatus<T> {
    fn map_grpc(self) -> Result<T, Status>;
}

impl<T> IntoGrpcStatus<T> for shared_kernel::errors::Result<T> {
    fn map_grpc(self) -> Result<T, Status> {
        self.map_err(status_from_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn not_found_maps_to_not_found() {
        let status = status_from_domain(DomainError::NotFound {
            entity: "Category",
            id: 42,
        });
        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("42"));
    }

    #[test]
    fn unauthorized_maps_to_unauthenticated() {
        let status = status_from_domain(DomainError::Unauthorized {
            reason: "bad credentials".into(),
        });
        assert_eq!(status.code(), Code::Unauthenticated);
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let status = status_from_domain(DomainError::Internal("pg: connection refused".into()));
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("pg:"));
    }
}
