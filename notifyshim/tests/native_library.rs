mod common;

use std::path::PathBuf;

use common::RecordingNotifier;
use notifyshim::config::ICON_POLICY_ENV;
use notifyshim::native::NativeLibrary;
use notifyshim::{Delivery, NotificationId, NotificationProvider, NotificationRequest, NotifyError};
use once_cell::sync::Lazy;

/// The workspace's `native_notifications` build, looked up next to this test
/// binary. The library reads its configuration on first call, so the icon
/// policy is pinned before anything can load it.
static BUILT_LIBRARY: Lazy<Option<PathBuf>> = Lazy::new(|| {
    std::env::set_var(ICON_POLICY_ENV, "reject");

    let exe = std::env::current_exe().ok()?;
    let deps = exe.parent()?;
    let found = [Some(deps), deps.parent()]
        .into_iter()
        .flatten()
        .find_map(NativeLibrary::locate);
    found
});

fn built_library() -> Option<PathBuf> {
    let path = BUILT_LIBRARY.clone();
    if path.is_none() {
        eprintln!("native_notifications has not been built next to the tests, skipping");
    }
    path
}

#[test]
fn loads_exported_symbols() {
    let Some(path) = built_library() else { return };
    let native = NativeLibrary::load(&path).unwrap();
    assert_eq!(native.path(), path.as_path());
}

#[test]
fn rejected_native_call_falls_back_to_command() {
    let Some(path) = built_library() else { return };
    let request = NotificationRequest::new("Deploy", "done").with_icon(Some("/no/such/deploy.png"));

    let native = NativeLibrary::load(&path).unwrap();
    assert!(matches!(native.show(&request), Err(NotifyError::Submission(_))));

    let provider = NotificationProvider::with_fallback(Some(&path), RecordingNotifier::default());
    assert!(provider.has_native());
    assert_eq!(provider.show(&request), Delivery::Command);

    let seen = provider.fallback().last().unwrap();
    assert_eq!(seen.title, "Deploy");
    assert_eq!(seen.message, "done");
}

#[test]
fn native_delivery_carries_the_library_id() {
    let Some(path) = built_library() else { return };
    let provider = NotificationProvider::with_fallback(Some(&path), RecordingNotifier::default());

    // Whether the OS accepts it depends on the session running the tests.
    match provider.show(&NotificationRequest::new("Build Complete", "Target X finished in 12s")) {
        Delivery::Native(id) => {
            assert!(id.get() >= 1);
            assert_eq!(provider.fallback().count(), 0);
            let _ = provider.remove(Delivery::Native(id));
        }
        Delivery::Command => assert_eq!(provider.fallback().count(), 1),
        Delivery::Logged => panic!("recording fallback never fails"),
    }
}

#[test]
fn unknown_native_id_is_not_removed() {
    let Some(path) = built_library() else { return };
    let provider = NotificationProvider::with_fallback(Some(&path), RecordingNotifier::default());
    assert!(!provider.remove(Delivery::Native(NotificationId::from_raw(1 << 40))));
}
