use thiserror::Error;

/// Expected command failures. Each carries the localized line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AccessDenied(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    NotEmpty(String),
    #[error("{0}")]
    BadUsage(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    UnknownCommand(String),
    /// Failure that escaped a handler's own checks.
    #[error("{0}")]
    Internal(String),
}

impl ShellError {
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::NotFound(_) => "not-found",
            ShellError::AccessDenied(_) => "access-denied",
            ShellError::AlreadyExists(_) => "already-exists",
            ShellError::NotEmpty(_) => "not-empty",
            ShellError::BadUsage(_) => "bad-usage",
            ShellError::Io(_) => "io",
            ShellError::UnknownCommand(_) => "unknown-command",
            ShellError::Internal(_) => "internal",
        }
    }
}
