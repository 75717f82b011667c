//! Notifications by shelling out to the platform's command-line tooling,
//! for hosts where the native library isn't available.

use std::process::Command;

use crate::config::NotifierConfig;
use crate::error::{NotifyError, Result};
use crate::platform::Notifier;
use crate::request::{NotificationId, NotificationRequest};

pub struct CommandNotifier {
    app_id: String,
}

impl CommandNotifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            app_id: config.app_id.clone().unwrap_or_else(|| config.app_name.clone()),
        }
    }

    /// Command for `os` (as in `std::env::consts::OS`), or `None` when there
    /// is nothing to shell out to.
    pub fn command_for(&self, os: &str, request: &NotificationRequest) -> Option<Command> {
        match os {
            "macos" => {
                let mut cmd = Command::new("osascript");
                cmd.arg("-e").arg(applescript(&request.title, &request.message));
                Some(cmd)
            }
            "windows" => {
                let mut cmd = Command::new("powershell");
                cmd.arg("-NoProfile")
                    .arg("-Command")
                    .arg(powershell_script(&self.app_id, &request.title, &request.message));
                Some(cmd)
            }
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => {
                let mut cmd = Command::new("notify-send");
                if let Some(icon) = request.icon() {
                    cmd.arg("--icon").arg(icon);
                }
                cmd.arg("--").arg(&request.title).arg(&request.message);
                Some(cmd)
            }
            _ => None,
        }
    }
}

impl Notifier for CommandNotifier {
    fn name(&self) -> &'static str {
        "command"
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        let os = std::env::consts::OS;
        let mut cmd = self.command_for(os, request).ok_or(NotifyError::Unsupported(os))?;

        let program = cmd.get_program().to_string_lossy().into_owned();
        let output = cmd
            .output()
            .map_err(|e| NotifyError::Submission(format!("{program}: {e}")))?;
        if !output.status.success() {
            return Err(NotifyError::Submission(format!(
                "{program} exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(NotificationId::next())
    }
}

pub fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn escape_powershell(s: &str) -> String {
    s.replace('\'', "''")
}

fn applescript(title: &str, message: &str) -> String {
    format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(message),
        escape_applescript(title)
    )
}

fn powershell_script(app_id: &str, title: &str, message: &str) -> String {
    format!(
        "[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null; \
         $xml = [Windows.UI.Notifications.ToastNotificationManager]::GetTemplateContent([Windows.UI.Notifications.ToastTemplateType]::ToastText02); \
         $text = $xml.GetElementsByTagName('text'); \
         $text[0].AppendChild($xml.CreateTextNode('{}')) | Out-Null; \
         $text[1].AppendChild($xml.CreateTextNode('{}')) | Out-Null; \
         $toast = [Windows.UI.Notifications.ToastNotification]::new($xml); \
         [Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier('{}').Show($toast)",
        escape_powershell(title),
        escape_powershell(message),
        escape_powershell(app_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn applescript_is_escaped() {
        let notifier = CommandNotifier::new(&NotifierConfig::default());
        let req = NotificationRequest::new(r#"Say "hi""#, r"C:\path");
        let cmd = notifier.command_for("macos", &req).unwrap();
        assert_eq!(cmd.get_program(), "osascript");
        assert_eq!(
            args(&cmd),
            vec![
                "-e".to_string(),
                r#"display notification "C:\\path" with title "Say \"hi\"""#.to_string()
            ]
        );
    }

    #[test]
    fn powershell_doubles_quotes() {
        let notifier = CommandNotifier::new(&NotifierConfig::default());
        let req = NotificationRequest::new("it's done", "ok");
        let cmd = notifier.command_for("windows", &req).unwrap();
        assert_eq!(cmd.get_program(), "powershell");
        let script = args(&cmd).pop().unwrap();
        assert!(script.contains("CreateTextNode('it''s done')"));
        assert!(script.contains("CreateToastNotifier('NotifyShim')"));
    }

    #[test]
    fn notify_send_passes_icon_and_text() {
        let notifier = CommandNotifier::new(&NotifierConfig::default());
        let req = NotificationRequest::new("-t", "body").with_icon(Some("/tmp/bell.png"));
        let cmd = notifier.command_for("linux", &req).unwrap();
        assert_eq!(cmd.get_program(), "notify-send");
        assert_eq!(args(&cmd), vec!["--icon", "/tmp/bell.png", "--", "-t", "body"]);
    }

    #[test]
    fn unknown_os_has_no_command() {
        let notifier = CommandNotifier::new(&NotifierConfig::default());
        assert!(notifier.command_for("plan9", &NotificationRequest::new("t", "m")).is_none());
    }
}
