use std::panic::{catch_unwind, AssertUnwindSafe};

use once_cell::sync::Lazy;

use crate::config::{self, NotifierConfig};
use crate::error::{NotifyError, Result};
use crate::icon::resolve_icon;
use crate::platform::{Notifier, PlatformNotifier};
use crate::request::{NotificationId, NotificationRequest};

/// Turns (title, message, icon) into one call on a [`Notifier`]. Nothing
/// leaves `dispatch` but a bool; the cause of a failure goes to the log.
pub struct NotificationDispatcher<N = PlatformNotifier> {
    notifier: N,
    config: NotifierConfig,
}

impl NotificationDispatcher<PlatformNotifier> {
    pub fn from_config(config: NotifierConfig) -> Self {
        let notifier = PlatformNotifier::new(&config);
        Self::with_notifier(notifier, config)
    }
}

impl<N: Notifier> NotificationDispatcher<N> {
    pub fn with_notifier(notifier: N, config: NotifierConfig) -> Self {
        Self { notifier, config }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// # Errors
    /// The failure that `dispatch` would have collapsed to `false`.
    pub fn try_dispatch(&self, title: &str, message: &str, icon: Option<&str>) -> Result<NotificationId> {
        let request = NotificationRequest::new(title, message).with_icon(icon);
        self.submit(request)
    }

    /// # Errors
    /// See [`NotificationDispatcher::try_dispatch`].
    pub fn submit(&self, mut request: NotificationRequest) -> Result<NotificationId> {
        let backend = self.notifier.name();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            request.icon = resolve_icon(request.icon(), self.config.icon_policy)?;
            self.notifier.show(&request)
        }))
        .unwrap_or_else(|payload| Err(NotifyError::from_panic(payload)));

        match &outcome {
            Ok(id) => tracing::info!(backend, %id, icon = request.icon.is_some(), "notification dispatched"),
            Err(e) => tracing::error!(backend, kind = %e.kind(), error = %e, "notification dispatch failed"),
        }
        outcome
    }

    pub fn dispatch(&self, title: &str, message: &str, icon: Option<&str>) -> bool {
        self.try_dispatch(title, message, icon).is_ok()
    }

    pub fn remove(&self, id: NotificationId) -> bool {
        let backend = self.notifier.name();
        let outcome = catch_unwind(AssertUnwindSafe(|| self.notifier.remove(id)))
            .unwrap_or_else(|payload| Err(NotifyError::from_panic(payload)));

        match outcome {
            Ok(removed) => {
                if !removed {
                    tracing::warn!(backend, %id, "notification not removed (unknown id or unsupported)");
                }
                removed
            }
            Err(e) => {
                tracing::error!(backend, %id, kind = %e.kind(), error = %e, "notification removal failed");
                false
            }
        }
    }
}

static GLOBAL: Lazy<NotificationDispatcher> = Lazy::new(|| {
    let config = config::load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "falling back to default notifier configuration");
        NotifierConfig::default()
    });
    NotificationDispatcher::from_config(config)
});

/// Process-wide dispatcher for the current platform, configured from
/// [`config::load`] on first use.
pub fn global() -> &'static NotificationDispatcher {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<NotificationRequest>>,
    }

    impl Notifier for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
            self.seen.lock().push(request.clone());
            Ok(NotificationId::next())
        }
    }

    struct Exploding;

    impl Notifier for Exploding {
        fn name(&self) -> &'static str {
            "exploding"
        }

        fn show(&self, _request: &NotificationRequest) -> Result<NotificationId> {
            panic!("backend blew up")
        }

        fn remove(&self, _id: NotificationId) -> Result<bool> {
            panic!("backend blew up on remove")
        }
    }

    #[test]
    fn forwards_title_and_message() {
        let dispatcher = NotificationDispatcher::with_notifier(Recorder::default(), NotifierConfig::default());
        assert!(dispatcher.dispatch("Build Complete", "Target X finished in 12s", None));

        let seen = dispatcher.notifier().seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title, "Build Complete");
        assert_eq!(seen[0].icon, None);
    }

    #[test]
    fn panics_become_false() {
        let dispatcher = NotificationDispatcher::with_notifier(Exploding, NotifierConfig::default());
        assert!(!dispatcher.dispatch("t", "m", None));
        assert!(matches!(
            dispatcher.try_dispatch("t", "m", None),
            Err(NotifyError::Unexpected(ref m)) if m == "backend blew up"
        ));
        assert!(!dispatcher.remove(NotificationId::from_raw(1)));
    }

    #[test]
    fn remove_is_false_when_unsupported() {
        let dispatcher = NotificationDispatcher::with_notifier(Recorder::default(), NotifierConfig::default());
        assert!(!dispatcher.remove(NotificationId::from_raw(1)));
    }
}
