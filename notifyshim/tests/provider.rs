mod common;

use std::sync::atomic::Ordering;

use common::{RecordingNotifier, RejectingNotifier};
use notifyshim::native::NativeLibrary;
use notifyshim::{Delivery, NotificationProvider, NotificationRequest};

#[test]
fn no_library_uses_fallback() {
    let provider = NotificationProvider::with_fallback(None, RecordingNotifier::default());
    assert!(!provider.has_native());

    let delivery = provider.show(&NotificationRequest::new("t", "m"));
    assert_eq!(delivery, Delivery::Command);
    assert!(delivery.is_displayed());
}

#[test]
fn unloadable_library_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join(NativeLibrary::file_name());
    std::fs::write(&bogus, b"not a shared object").unwrap();

    let provider = NotificationProvider::with_fallback(Some(&bogus), RecordingNotifier::default());
    assert!(!provider.has_native());
    assert_eq!(provider.show(&NotificationRequest::new("t", "m")), Delivery::Command);
}

#[test]
fn failing_fallback_is_only_logged() {
    let provider = NotificationProvider::with_fallback(None, RejectingNotifier::default());
    let delivery = provider.show(&NotificationRequest::new("t", "m"));
    assert_eq!(delivery, Delivery::Logged);
    assert!(!delivery.is_displayed());
}

#[test]
fn fallback_deliveries_cannot_be_removed() {
    let provider = NotificationProvider::with_fallback(None, RejectingNotifier::default());
    assert!(!provider.remove(Delivery::Command));
    assert!(!provider.remove(Delivery::Logged));
    assert_eq!(provider.fallback().attempts.load(Ordering::SeqCst), 0);
}

#[test]
fn fallback_sees_the_request() {
    let provider = NotificationProvider::with_fallback(None, RecordingNotifier::default());
    provider.show(&NotificationRequest::new("Deploy", "done").with_icon(Some("/tmp/deploy.png")));

    let seen = provider.fallback().last().unwrap();
    assert_eq!(seen.title, "Deploy");
    assert_eq!(seen.message, "done");
    assert_eq!(seen.icon.as_deref(), Some(std::path::Path::new("/tmp/deploy.png")));
}
