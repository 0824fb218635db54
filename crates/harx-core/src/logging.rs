//! Logging init: tracing to stderr, filter from the environment.
//!
//! Progress lines ("Saved: ...") go to stdout from the extraction loop;
//! warnings and write errors come through here so they can be filtered
//! or redirected independently of the file listing.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` overrides the default filter of `info,harx=debug`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,harx=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
