#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use notifyshim::{NotificationId, NotificationRequest, Notifier, NotifyError, Result};

/// Accepts everything and remembers what it was asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: Mutex<Vec<NotificationRequest>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn last(&self) -> Option<NotificationRequest> {
        self.seen.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        self.seen.lock().push(request.clone());
        Ok(NotificationId::next())
    }
}

/// Rejects every submission and counts the attempts.
#[derive(Default)]
pub struct RejectingNotifier {
    pub attempts: AtomicUsize,
}

impl Notifier for RejectingNotifier {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    fn show(&self, _request: &NotificationRequest) -> Result<NotificationId> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Submission("queue full".to_string()))
    }
}

pub struct PanickingNotifier;

impl Notifier for PanickingNotifier {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn show(&self, _request: &NotificationRequest) -> Result<NotificationId> {
        panic!("native call path crashed")
    }
}

pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::new(8, 8).save(&path).unwrap();
    path
}
