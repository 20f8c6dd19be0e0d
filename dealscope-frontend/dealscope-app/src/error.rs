use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("Unknown sort mode {0:?}")]
    UnknownSortMode(String),
    #[error("Unknown quality filter {0:?}")]
    UnknownQualityFilter(String),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_errors_keep_their_message() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(&err, AppError::Json(message) if message.contains("expected")));
        assert_eq!(
            AppError::UnknownSortMode("cheap".to_string()).to_string(),
            "Unknown sort mode \"cheap\""
        );
    }
}
