use std::{num::ParseIntError, path::PathBuf};

use dealscope_app::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Leptos configuration error {0}")]
    Configuration(String),
    #[error("{} must point at the analysis JSON to serve", crate::config::ANALYSIS_ENV)]
    MissingAnalysisPath,
    #[error("PORT is not a valid port {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Unable to read analysis {path}: {source}")]
    ReadAnalysis {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Analysis {path} is not valid: {source}")]
    ParseAnalysis {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unable to embed analysis {0}")]
    Payload(#[from] AppError),
    #[error("IO Error {0}")]
    StdError(#[from] std::io::Error),
}
