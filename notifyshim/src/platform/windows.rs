//! WinRT toast notifications.
//!
//! The first `show` registers the process-wide Application User Model ID and
//! creates the toast notifier. Every submitted toast is parked in a
//! [`HandlerRegistry`] together with its event handlers until Windows reports
//! it activated, dismissed or failed.

use windows::core::{IInspectable, Interface, HSTRING, PCWSTR};
use windows::Data::Xml::Dom::XmlDocument;
use windows::Foundation::TypedEventHandler;
use windows::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;
use windows::UI::Notifications::{
    ToastActivatedEventArgs, ToastDismissedEventArgs, ToastFailedEventArgs, ToastNotification,
    ToastNotificationManager, ToastNotifier,
};

use crate::config::NotifierConfig;
use crate::engine::Engine;
use crate::error::{NotifyError, Result};
use crate::identity::AppIdentity;
use crate::lifecycle::{DismissalReason, HandlerRegistry, ToastEvent};
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};
use crate::template::ToastTemplate;
use crate::text::to_wide_null;

struct ToastEngine {
    aumi: String,
    notifier: ToastNotifier,
    live: HandlerRegistry<ToastNotification>,
}

static ENGINE: Engine<ToastEngine> = Engine::new();

pub struct WindowsNotifier {
    config: NotifierConfig,
}

impl WindowsNotifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self { config: config.clone() }
    }

    fn engine(&self) -> Result<&'static ToastEngine> {
        ENGINE.get_or_init("windows", || {
            let identity = AppIdentity::from_config(&self.config)?;
            let wide = to_wide_null(&identity.app_id);
            unsafe { SetCurrentProcessExplicitAppUserModelID(PCWSTR::from_raw(wide.as_ptr())) }
                .map_err(|e| NotifyError::Initialization(format!("registering AUMI {}: {e}", identity.app_id)))?;

            let notifier = ToastNotificationManager::CreateToastNotifierWithId(&HSTRING::from(
                identity.app_id.as_str(),
            ))
            .map_err(|e| NotifyError::Initialization(format!("creating toast notifier: {e}")))?;

            tracing::info!(aumi = %identity.app_id, app = %identity.app_name, "toast engine ready");
            Ok(ToastEngine {
                aumi: identity.app_id,
                notifier,
                live: HandlerRegistry::new(self.config.handler_ttl()),
            })
        })
    }
}

fn lifecycle_event(id: NotificationId, event: ToastEvent) {
    if let Some(engine) = ENGINE.get() {
        engine.live.complete(id, &event);
    }
}

fn build_toast(request: &NotificationRequest) -> windows::core::Result<ToastNotification> {
    let xml = ToastTemplate::from_request(request).to_xml();
    let document = XmlDocument::new()?;
    document.LoadXml(&HSTRING::from(xml.as_str()))?;
    ToastNotification::CreateToastNotification(&document)
}

fn attach_handlers(toast: &ToastNotification, id: NotificationId) -> windows::core::Result<()> {
    toast.Activated(&TypedEventHandler::<ToastNotification, IInspectable>::new(
        move |_, args: &Option<IInspectable>| {
            let arguments = args
                .as_ref()
                .and_then(|a| a.cast::<ToastActivatedEventArgs>().ok())
                .and_then(|a| a.Arguments().ok())
                .map(|a| a.to_string())
                .unwrap_or_default();
            lifecycle_event(id, ToastEvent::from_activation_arguments(&arguments));
            Ok(())
        },
    ))?;

    toast.Dismissed(&TypedEventHandler::<ToastNotification, ToastDismissedEventArgs>::new(
        move |_, args: &Option<ToastDismissedEventArgs>| {
            let reason = args
                .as_ref()
                .and_then(|a| a.Reason().ok())
                .map(|r| DismissalReason::from_raw(r.0))
                .unwrap_or(DismissalReason::Unknown(-1));
            lifecycle_event(id, ToastEvent::Dismissed(reason));
            Ok(())
        },
    ))?;

    toast.Failed(&TypedEventHandler::<ToastNotification, ToastFailedEventArgs>::new(
        move |_, args: &Option<ToastFailedEventArgs>| {
            let code = args
                .as_ref()
                .and_then(|a| a.ErrorCode().ok())
                .map(|hr| hr.message().to_string())
                .unwrap_or_default();
            lifecycle_event(id, ToastEvent::Failed(code));
            Ok(())
        },
    ))?;

    Ok(())
}

impl Notifier for WindowsNotifier {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        let engine = self.engine()?;
        let id = NotificationId::next();

        let toast = build_toast(request).map_err(|e| NotifyError::Unexpected(format!("building toast: {e}")))?;
        attach_handlers(&toast, id)
            .map_err(|e| NotifyError::Unexpected(format!("registering toast handlers: {e}")))?;

        // Track before showing so a callback that fires immediately finds the entry.
        engine.live.track(id, toast.clone());
        if let Err(e) = engine.notifier.Show(&toast) {
            engine.live.take(id);
            return Err(NotifyError::Submission(e.to_string()));
        }

        tracing::debug!(%id, aumi = %engine.aumi, live = engine.live.len(), "toast shown");
        Ok(id)
    }

    fn remove(&self, id: NotificationId) -> Result<bool> {
        // Nothing was ever shown if the engine never came up.
        let Some(engine) = ENGINE.get() else {
            return Ok(false);
        };
        match engine.live.take(id) {
            Some(toast) => {
                engine
                    .notifier
                    .Hide(&toast)
                    .map_err(|e| NotifyError::Submission(format!("hiding toast {id}: {e}")))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
