//! Tracing subscriber setup
//!
//! Filter precedence: `--log`, then `RUST_LOG`, then the settings file.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive to use
pub fn resolve_filter(cli: Option<&str>, env: Option<String>, settings_filter: &str) -> String {
    cli.map(str::to_owned)
        .or(env)
        .unwrap_or_else(|| settings_filter.to_owned())
}

/// Install the global fmt subscriber, writing to stderr
///
/// An invalid directive falls back to `warn`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("[LOGGING] filter = {filter}");
    }
}
