use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding the tracing filter, e.g. `SKK_CLI_LOG=skk_core=debug`.
pub const LOG_ENV: &str = "SKK_CLI_LOG";

/// Log to stderr so stdout carries only responses.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    });
}
