use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

/// Everything that can go wrong between a caller and the OS notification
/// service. The public boundary collapses all of these into `false`; the
/// variant only survives into the log line.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification engine initialization failed: {0}")]
    Initialization(String),

    #[error("text encoding failed: {0}")]
    Encoding(String),

    #[error("notification submission failed: {0}")]
    Submission(String),

    #[error("unexpected failure during dispatch: {0}")]
    Unexpected(String),

    #[error("icon {path} is unusable: {reason}")]
    InvalidIcon { path: PathBuf, reason: String },

    #[error("notifications are not supported on {0}")]
    Unsupported(&'static str),

    #[error("native library error: {0}")]
    Library(String),

    #[error("configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Initialization,
    Encoding,
    Submission,
    Unexpected,
    InvalidIcon,
    Unsupported,
    Library,
    Config,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Initialization => "initialization",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Submission => "submission",
            ErrorKind::Unexpected => "unexpected",
            ErrorKind::InvalidIcon => "invalid_icon",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::Library => "library",
            ErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotifyError::Initialization(_) => ErrorKind::Initialization,
            NotifyError::Encoding(_) => ErrorKind::Encoding,
            NotifyError::Submission(_) => ErrorKind::Submission,
            NotifyError::Unexpected(_) => ErrorKind::Unexpected,
            NotifyError::InvalidIcon { .. } => ErrorKind::InvalidIcon,
            NotifyError::Unsupported(_) => ErrorKind::Unsupported,
            NotifyError::Library(_) => ErrorKind::Library,
            NotifyError::Config(_) => ErrorKind::Config,
        }
    }

    /// Turns a panic payload caught at the dispatch boundary into an error.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        NotifyError::Unexpected(message)
    }
}
