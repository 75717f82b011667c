//! What a host application talks to: the native library when it loaded,
//! otherwise a fallback notifier, and a log line as the last resort.

use std::path::Path;

use crate::config::NotifierConfig;
use crate::fallback::CommandNotifier;
use crate::native::NativeLibrary;
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Native(NotificationId),
    Command,
    Logged,
}

impl Delivery {
    pub fn is_displayed(self) -> bool {
        !matches!(self, Delivery::Logged)
    }
}

pub struct NotificationProvider<F = CommandNotifier> {
    native: Option<NativeLibrary>,
    fallback: F,
}

impl NotificationProvider<CommandNotifier> {
    pub fn new(library: Option<&Path>, config: &NotifierConfig) -> Self {
        Self::with_fallback(library, CommandNotifier::new(config))
    }
}

impl<F: Notifier> NotificationProvider<F> {
    pub fn with_fallback(library: Option<&Path>, fallback: F) -> Self {
        let native = library.and_then(|path| match NativeLibrary::load(path) {
            Ok(lib) => Some(lib),
            Err(e) => {
                tracing::warn!(error = %e, fallback = fallback.name(), "native notification library unavailable");
                None
            }
        });
        Self { native, fallback }
    }

    pub fn has_native(&self) -> bool {
        self.native.is_some()
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn show(&self, request: &NotificationRequest) -> Delivery {
        if let Some(native) = &self.native {
            match native.show(request) {
                Ok(id) => {
                    tracing::info!(%id, "notification shown by native library");
                    return Delivery::Native(id);
                }
                Err(e) => tracing::warn!(error = %e, "native notification failed, falling back"),
            }
        }

        match self.fallback.show(request) {
            Ok(_) => {
                tracing::info!(via = self.fallback.name(), "notification shown by fallback");
                Delivery::Command
            }
            Err(e) => {
                tracing::error!(via = self.fallback.name(), kind = %e.kind(), error = %e, "fallback notification failed");
                tracing::info!(title = %request.title, message = %request.message, "notification (logged)");
                Delivery::Logged
            }
        }
    }

    /// Only notifications shown by the native library can be removed.
    pub fn remove(&self, delivery: Delivery) -> bool {
        match (delivery, &self.native) {
            (Delivery::Native(id), Some(native)) => native.remove(id).unwrap_or_else(|e| {
                tracing::error!(error = %e, "native removal failed");
                false
            }),
            _ => {
                tracing::warn!("removing notifications is not supported for this delivery");
                false
            }
        }
    }
}
