//! OS notification backends. Exactly one is compiled in per target and
//! exported as [`PlatformNotifier`].

use crate::error::Result;
use crate::request::{NotificationId, NotificationRequest};

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::WindowsNotifier as PlatformNotifier;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use self::macos::MacNotifier as PlatformNotifier;

#[cfg(all(unix, not(target_os = "macos")))]
mod freedesktop;
#[cfg(all(unix, not(target_os = "macos")))]
pub use self::freedesktop::FreedesktopNotifier as PlatformNotifier;

mod unsupported;
pub use self::unsupported::UnsupportedNotifier;
#[cfg(not(any(unix, target_os = "windows")))]
pub use self::unsupported::UnsupportedNotifier as PlatformNotifier;

/// A way of putting a notification on screen.
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Submits one notification. Called once per dispatch, never retried.
    fn show(&self, request: &NotificationRequest) -> Result<NotificationId>;

    /// Withdraws a notification that is still displayed. Backends that can't
    /// do this report `Ok(false)`.
    fn remove(&self, _id: NotificationId) -> Result<bool> {
        Ok(false)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        (**self).show(request)
    }

    fn remove(&self, id: NotificationId) -> Result<bool> {
        (**self).remove(id)
    }
}
