//! Logging initialization
//!
//! Logs go to stderr so they never interleave with the console menu on stdout.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "team_roster=debug"
    } else {
        "team_roster=info"
    }
}

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(false);
        init(true);
        init(false);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "team_roster=info");
        assert_eq!(default_directive(true), "team_roster=debug");
    }
}
