use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::error::{NotifyError, Result};

/// Process-wide backend state that is set up on first use.
///
/// Concurrent first callers block until one initializer has finished. A
/// successful value is stored exactly once; a failed attempt stores nothing,
/// so the next caller tries again.
pub struct Engine<T> {
    cell: OnceCell<T>,
    attempts: AtomicUsize,
}

impl<T> Engine<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// # Errors
    /// Whatever `init` returns; non-initialization errors are rewrapped as
    /// `NotifyError::Initialization`.
    pub fn get_or_init<F>(&self, backend: &'static str, init: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.cell.get_or_try_init(|| {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(backend, attempt, "initializing notification engine");
            init().map_err(|e| {
                tracing::error!(backend, attempt, error = %e, "notification engine initialization failed");
                match e {
                    NotifyError::Initialization(_) => e,
                    other => NotifyError::Initialization(other.to_string()),
                }
            })
        })
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of times an initializer has been run, successful or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<T> Default for Engine<T> {
    fn default() -> Self {
        Self::new()
    }
}
