use std::io;

use thiserror::Error;

/// Every variant except `Io` carries the exact text shown to the operator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ToolNotInstalled(String),
    #[error("{0}")]
    NotARepository(String),
    #[error("{0}")]
    NoChangesToCommit(String),
    #[error("{0}")]
    CommandFailed(String),
    #[error("{0}")]
    AuthenticationFailed(String),
    #[error("{0}")]
    NetworkOrRemoteIssue(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("input closed")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
