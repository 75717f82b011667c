use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub icon: Option<PathBuf>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon: None,
        }
    }

    /// An empty path means "no icon", same as `None`.
    pub fn with_icon<P: AsRef<Path>>(mut self, icon: Option<P>) -> Self {
        self.icon = icon
            .map(|p| p.as_ref().to_path_buf())
            .filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle for a submitted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn next() -> Self {
        NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(raw: u64) -> Self {
        NotificationId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Signed form used across the C boundary, where `-1` means failure.
    pub fn to_ffi(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    pub fn from_ffi(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().map(NotificationId)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
