// crates/shared-kernel/src/errors/error_body.rs

use serde::Serialize;

/// Enveloppe d'erreur exposée au client HTTP : `{status, message, code}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
    pub code: u16,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
            code,
        }
    }
}
