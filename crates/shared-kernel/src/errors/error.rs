// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

/// Erreur métier remontée par un Domain Service.
///
/// Chaque variante porte de quoi reconstruire le triplet
/// `{status, message, code}` attendu par les deux frontières ; chaque
/// tier traduit les variantes directement (statut gRPC côté RPC,
/// statut HTTP côté gateway).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{entity} not found with id '{id}'")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Identité invalide (login raté, refresh token inconnu).
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Erreur technique du collaborateur (stockage, réseau interne).
    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
