//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_core::PfError;
use pf_fit::FitError;

/// Application error type shared by the CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file format (expected .yaml, .yml or .json): {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// The edit itself was refused; the point set is unchanged.
    #[error("Edit rejected: {0}")]
    Edit(#[from] PfError),

    /// The point set changed but the curve could not be refreshed.
    #[error("Curve not refreshed: {0}")]
    Fit(#[from] FitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;
