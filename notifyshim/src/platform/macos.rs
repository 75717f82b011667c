use mac_notification_sys::Notification;

use crate::config::NotifierConfig;
use crate::engine::Engine;
use crate::error::{NotifyError, Result};
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};

/// Bundle the process posts notifications as. `set_application` may only
/// be called once per process, hence the engine guard.
struct MacSession {
    bundle_id: String,
}

static SESSION: Engine<MacSession> = Engine::new();

/// Notifications through the macOS user-notification center.
pub struct MacNotifier {
    app_name: String,
    bundle_id: Option<String>,
}

impl MacNotifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            bundle_id: config
                .app_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }

    fn session(&self) -> Result<&'static MacSession> {
        SESSION.get_or_init("macos", || {
            let bundle_id = match &self.bundle_id {
                Some(id) => id.clone(),
                None => mac_notification_sys::get_bundle_identifier_or_default(&self.app_name),
            };
            mac_notification_sys::set_application(&bundle_id)
                .map_err(|e| NotifyError::Initialization(format!("set_application({bundle_id}): {e}")))?;
            tracing::info!(bundle_id = %bundle_id, "registered notification sender");
            Ok(MacSession { bundle_id })
        })
    }
}

impl Notifier for MacNotifier {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        let session = self.session()?;

        let icon = request.icon().map(|p| p.to_string_lossy().into_owned());
        let mut notification = Notification::new();
        notification.title(&request.title).message(&request.message);
        if let Some(icon) = icon.as_deref() {
            notification.content_image(icon);
        }

        let response = notification
            .send()
            .map_err(|e| NotifyError::Submission(e.to_string()))?;

        let id = NotificationId::next();
        tracing::debug!(%id, bundle_id = %session.bundle_id, ?response, "notification posted");
        Ok(id)
    }
}
