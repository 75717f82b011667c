//! Diagnostic output. Everything goes to stderr so a host process that owns
//! stdout is left alone.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NOTIFYSHIM_LOG";

/// Installs a stderr subscriber filtered by `NOTIFYSHIM_LOG`, falling back to
/// `default_directive`. A no-op if the process already has a subscriber.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Quiet setup for library hosts: only warnings and errors.
pub fn init_for_library() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| init("warn"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_for_library();
        init_for_library();
        init("debug");
        tracing::warn!("still logging");
    }
}
