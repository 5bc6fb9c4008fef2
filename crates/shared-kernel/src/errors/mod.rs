// crates/shared-kernel/src/errors/mod.rs

mod error;
mod error_body;
mod result;

pub use error::DomainError;
pub use error_body::ErrorBody;
pub use result::Result;
