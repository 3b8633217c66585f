//! Shared helpers for unit tests

use std::sync::Once;

static TEST_INIT: Once = Once::new();

/// Installs a quiet tracing subscriber once for the whole test binary.
pub fn init_test_env() {
    TEST_INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_env_is_safe_to_call_multiple_times() {
        init_test_env();
        init_test_env();
    }
}
