mod config;
mod error;
mod format;
mod install;

pub use config::{KEEL_TARGET, LoggerConfig};
pub use error::LoggerError;
pub use format::LoggerFormat;

use tracing_subscriber::fmt::MakeWriter;

/// Install the global `tracing` subscriber described by `cfg`, writing to stdout.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is already set.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    logger_init_with_writer(cfg, std::io::stdout)
}

/// Like [`logger_init`], with text and json output sent to `writer`.
///
/// Journald output ignores the writer.
pub fn logger_init_with_writer<W>(cfg: &LoggerConfig, writer: W) -> Result<(), LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    install::install(cfg, writer)
}
