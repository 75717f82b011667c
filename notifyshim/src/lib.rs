//! Show a native desktop notification from anywhere.
//!
//! One backend per operating system is compiled in: WinRT toasts on
//! Windows, the user-notification center on macOS and the freedesktop
//! notification service elsewhere on Unix. [`show_notification`] is the
//! whole contract: it never panics or returns an error, only `true` when the
//! OS accepted the notification.

pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod icon;
pub mod identity;
pub mod lifecycle;
pub mod logging;
pub mod native;
pub mod platform;
pub mod provider;
pub mod request;
pub mod template;
pub mod text;

pub use config::{IconPolicy, NotifierConfig};
pub use dispatcher::{global, NotificationDispatcher};
pub use error::{ErrorKind, NotifyError, Result};
pub use platform::{Notifier, PlatformNotifier};
pub use provider::{Delivery, NotificationProvider};
pub use request::{NotificationId, NotificationRequest};

pub fn show_notification(title: &str, message: &str, icon_path: Option<&str>) -> bool {
    global().dispatch(title, message, icon_path)
}

pub fn remove_notification(id: NotificationId) -> bool {
    global().remove(id)
}
