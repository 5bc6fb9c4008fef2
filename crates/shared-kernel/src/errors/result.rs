// crates/shared-kernel/src/errors/result.rs

use crate::errors::DomainError;

/// Result du domaine, utilisé par les Domain Services et les handlers RPC.
pub type Result<T> = std::result::Result<T, DomainError>;
