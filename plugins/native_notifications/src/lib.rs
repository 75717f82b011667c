//! C ABI for `notifyshim`, built as a loadable library.
//!
//! Strings are NUL-terminated UTF-8. A null or undecodable title/message is
//! shown as empty text; a null or empty icon path means no icon.

use std::ffi::c_char;
use std::panic::{catch_unwind, UnwindSafe};

use notifyshim::text::{decode_c_str, decode_optional_c_str};
use notifyshim::{global, logging, NotificationId, NotifyError};

/// Runs one exported call, turning a panic into `failed`.
fn guarded<T>(call: &'static str, failed: T, body: impl FnOnce() -> T + UnwindSafe) -> T {
    catch_unwind(body).unwrap_or_else(|payload| {
        let err = NotifyError::from_panic(payload);
        tracing::error!(call, error = %err, "panic stopped at the C boundary");
        failed
    })
}

/// Shows a notification and reports whether the OS accepted it.
///
/// # Safety
///
/// Every non-null pointer must point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn show_notification(
    title: *const c_char,
    message: *const c_char,
    icon_path: *const c_char,
) -> bool {
    show_notification_id(title, message, icon_path) >= 0
}

/// Like [`show_notification`] but returns the notification id, or `-1` on
/// failure.
///
/// # Safety
///
/// Same contract as [`show_notification`].
#[no_mangle]
pub unsafe extern "C" fn show_notification_id(
    title: *const c_char,
    message: *const c_char,
    icon_path: *const c_char,
) -> i64 {
    guarded("show_notification_id", -1, || {
        logging::init_for_library();

        let title = decode_c_str(title, "title");
        let message = decode_c_str(message, "message");
        let icon = decode_optional_c_str(icon_path, "icon_path");

        match global().try_dispatch(&title, &message, icon.as_deref()) {
            Ok(id) => id.to_ffi(),
            Err(_) => -1,
        }
    })
}

/// Withdraws a notification returned by [`show_notification_id`]. Returns
/// `false` for unknown ids and on platforms that can't remove notifications.
#[no_mangle]
pub extern "C" fn remove_notification(id: i64) -> bool {
    guarded("remove_notification", false, || {
        logging::init_for_library();

        match NotificationId::from_ffi(id) {
            Some(id) => global().remove(id),
            None => {
                tracing::warn!(id, "ignoring removal of invalid notification id");
                false
            }
        }
    })
}
