//! Tracing subscriber setup.
//!
//! The filter is read from `SURVEY_LOG` (standard `EnvFilter` syntax) and
//! falls back to the supplied level. Calling this more than once is harmless:
//! the second install attempt is ignored.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SURVEY_LOG";

/// Install a global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_ignored() {
        init_tracing("info");
        assert!(!init_tracing("debug"));
    }
}
