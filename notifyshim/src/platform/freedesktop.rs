use notify_rust::{Notification, ServerInformation};

use crate::config::NotifierConfig;
use crate::engine::Engine;
use crate::error::{NotifyError, Result};
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};

/// The notification server we talked to on first use.
static SERVER: Engine<ServerInformation> = Engine::new();

/// Desktop notifications over the freedesktop D-Bus service.
pub struct FreedesktopNotifier {
    app_name: String,
}

impl FreedesktopNotifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
        }
    }

    fn server(&self) -> Result<&'static ServerInformation> {
        SERVER.get_or_init("freedesktop", || {
            let info = notify_rust::get_server_information()
                .map_err(|e| NotifyError::Initialization(format!("no notification server: {e}")))?;
            tracing::info!(
                server = %info.name,
                vendor = %info.vendor,
                version = %info.version,
                "connected to notification server"
            );
            // `get_server_information` returns notify-rust's private `xdg`
            // struct; the crate-root re-export is a distinct, field-identical type.
            Ok(ServerInformation {
                name: info.name,
                vendor: info.vendor,
                version: info.version,
                spec_version: info.spec_version,
            })
        })
    }
}

impl Notifier for FreedesktopNotifier {
    fn name(&self) -> &'static str {
        "freedesktop"
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        let server = self.server()?;

        let mut notification = Notification::new();
        notification
            .summary(&request.title)
            .body(&request.message)
            .appname(&self.app_name);
        if let Some(icon) = request.icon() {
            notification.icon(&icon.to_string_lossy());
        }

        let handle = notification
            .show()
            .map_err(|e| NotifyError::Submission(e.to_string()))?;

        let id = NotificationId::next();
        tracing::debug!(%id, server = %server.name, server_id = handle.id(), "notification posted");
        Ok(id)
    }
}
