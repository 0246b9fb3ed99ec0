//! Logging initialization.
//!
//! Logs always go to stderr: stdout carries the STDIO transport.

use tracing_subscriber::{EnvFilter, fmt};

use super::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` directives are honored on top of the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::from_default_env().add_directive(config.tracing_level().into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Development => builder
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .init(),
        LogFormat::Production => builder
            .compact()
            .with_ansi(false)
            .with_file(false)
            .with_line_number(false)
            .init(),
    }
}
