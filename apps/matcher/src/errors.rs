use thiserror::Error;

use crate::documents::DocumentError;

/// Application-level error type.
/// `main` maps each variant to a process exit code and a short error code for logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable error code, logged alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Document(_) => "DOCUMENT_ERROR",
            AppError::Export(_) => "EXPORT_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Exit status: 2 for bad input the user can fix, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) | AppError::Document(_) => 2,
            AppError::Export(_) | AppError::Io(_) | AppError::Internal(_) => 1,
        }
    }
}
