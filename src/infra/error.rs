use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config file does not exist: {path}")]
    ConfigMissing { path: PathBuf },
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file at {path}: {details}")]
    ConfigInvalid { path: PathBuf, details: String },
    #[error("message file does not exist: {path}")]
    MessageFileMissing { path: PathBuf },
    #[error("failed to read message file at {path}: {source}")]
    MessageFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid message: {details}")]
    InvalidMessage { details: String },
    #[error("failed to persist work list at {path}: {source}")]
    WorkListWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClientInit(#[source] reqwest::Error),
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
