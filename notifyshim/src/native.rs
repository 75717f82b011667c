//! Host-side access to the `native_notifications` shared library.

use std::ffi::{c_char, CString};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::error::{NotifyError, Result};
use crate::request::{NotificationId, NotificationRequest};

pub const LIBRARY_NAME: &str = "native_notifications";

type ShowFn = unsafe extern "C" fn(*const c_char, *const c_char, *const c_char) -> i64;
type RemoveFn = unsafe extern "C" fn(i64) -> bool;

const SHOW_SYMBOL: &[u8] = b"show_notification_id\0";
const REMOVE_SYMBOL: &[u8] = b"remove_notification\0";

pub struct NativeLibrary {
    path: PathBuf,
    lib: Library,
}

impl NativeLibrary {
    /// Platform file name of the library, e.g. `libnative_notifications.so`.
    pub fn file_name() -> PathBuf {
        PathBuf::from(libloading::library_filename(LIBRARY_NAME))
    }

    /// Looks for the library in `dir`.
    pub fn locate(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(Self::file_name());
        candidate.is_file().then_some(candidate)
    }

    /// # Errors
    /// Returns `NotifyError::Library` if the file can't be loaded or doesn't
    /// export the expected symbols.
    pub fn load(path: &Path) -> Result<Self> {
        // SAFETY: loading runs the library's initializers; we only load our own cdylib.
        let lib = unsafe { Library::new(path) }
            .map_err(|e| NotifyError::Library(format!("failed to load {}: {e}", path.display())))?;

        let native = Self {
            path: path.to_path_buf(),
            lib,
        };
        native.show_fn()?;
        native.remove_fn()?;
        tracing::info!(path = %native.path.display(), "native notification library loaded");
        Ok(native)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn show_fn(&self) -> Result<Symbol<'_, ShowFn>> {
        unsafe { self.lib.get(SHOW_SYMBOL) }
            .map_err(|e| NotifyError::Library(format!("show_notification_id not found: {e}")))
    }

    fn remove_fn(&self) -> Result<Symbol<'_, RemoveFn>> {
        unsafe { self.lib.get(REMOVE_SYMBOL) }
            .map_err(|e| NotifyError::Library(format!("remove_notification not found: {e}")))
    }

    /// # Errors
    /// `NotifyError::Encoding` for text with interior NULs, and
    /// `NotifyError::Submission` when the library reports failure.
    pub fn show(&self, request: &NotificationRequest) -> Result<NotificationId> {
        let title = c_string(&request.title, "title")?;
        let message = c_string(&request.message, "message")?;
        let icon = request
            .icon()
            .map(|p| c_string(&p.to_string_lossy(), "icon"))
            .transpose()?;

        let show = self.show_fn()?;
        // SAFETY: every pointer is a live NUL-terminated CString or null.
        let raw = unsafe {
            show(
                title.as_ptr(),
                message.as_ptr(),
                icon.as_ref().map_or(std::ptr::null(), |c| c.as_ptr()),
            )
        };
        NotificationId::from_ffi(raw)
            .ok_or_else(|| NotifyError::Submission(format!("native library returned {raw}")))
    }

    /// # Errors
    /// `NotifyError::Library` if the symbol disappeared.
    pub fn remove(&self, id: NotificationId) -> Result<bool> {
        let remove = self.remove_fn()?;
        // SAFETY: plain integer argument.
        Ok(unsafe { remove(id.to_ffi()) })
    }
}

fn c_string(text: &str, field: &str) -> Result<CString> {
    CString::new(text).map_err(|e| NotifyError::Encoding(format!("{field} contains NUL at byte {}", e.nul_position())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_an_error() {
        let err = NativeLibrary::load(Path::new("/no/such/libnative_notifications.so"))
            .err()
            .unwrap();
        assert!(matches!(err, NotifyError::Library(_)));
    }

    #[test]
    fn locate_finds_nothing_in_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(NativeLibrary::locate(dir.path()), None);

        std::fs::write(dir.path().join(NativeLibrary::file_name()), b"").unwrap();
        assert!(NativeLibrary::locate(dir.path()).is_some());
    }

    #[test]
    fn file_name_mentions_library() {
        let name = NativeLibrary::file_name();
        assert!(name.to_string_lossy().contains(LIBRARY_NAME));
    }

    #[test]
    fn interior_nul_is_an_encoding_error() {
        assert!(matches!(c_string("a\0b", "title"), Err(NotifyError::Encoding(_))));
        assert!(c_string("ok", "title").is_ok());
    }
}
