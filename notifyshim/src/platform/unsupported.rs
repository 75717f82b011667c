use crate::config::NotifierConfig;
use crate::error::{NotifyError, Result};
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};

/// Backend for targets without a notification service. Every dispatch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedNotifier;

impl UnsupportedNotifier {
    pub fn new(_config: &NotifierConfig) -> Self {
        UnsupportedNotifier
    }
}

impl Notifier for UnsupportedNotifier {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn show(&self, _request: &NotificationRequest) -> Result<NotificationId> {
        Err(NotifyError::Unsupported(std::env::consts::OS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_fails() {
        let notifier = UnsupportedNotifier::new(&NotifierConfig::default());
        let err = notifier.show(&NotificationRequest::new("t", "m")).unwrap_err();
        assert!(matches!(err, NotifyError::Unsupported(_)));
        assert!(!notifier.remove(NotificationId::from_raw(1)).unwrap());
    }
}
