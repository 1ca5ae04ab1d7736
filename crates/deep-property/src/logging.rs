//! Subscriber setup for the `deep-property` binary.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to applications.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable lines on stderr.
    #[default]
    Human,
    /// One JSON object per event on stderr.
    Json,
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "deep_property=warn";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = match profile {
            Profile::Human => builder.try_init(),
            Profile::Json => builder.json().try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Human);
        init(Profile::Json);
        init(Profile::Human);
    }

    #[test]
    fn test_default_profile() {
        assert_eq!(Profile::default(), Profile::Human);
        assert_ne!(Profile::Human, Profile::Json);
    }
}
