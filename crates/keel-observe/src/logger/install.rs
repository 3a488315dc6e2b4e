use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, MakeWriter, time::OffsetTime},
    layer::{Layered, SubscriberExt},
};

use crate::logger::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

type Filtered = Layered<EnvFilter, Registry>;

pub(crate) fn install<W>(cfg: &LoggerConfig, writer: W) -> Result<(), LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::registry().with(cfg.filter()?);

    match cfg.format {
        LoggerFormat::Text => set_global(
            base.with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(cfg.use_color)
                    .with_target(cfg.with_targets)
                    .with_timer(local_rfc3339()),
            ),
        ),
        LoggerFormat::Json => set_global(
            base.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(cfg.with_targets)
                    .with_timer(local_rfc3339()),
            ),
        ),
        LoggerFormat::Journald => journald(base),
    }
}

fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

/// `set_global_default` only fails when a global dispatcher already exists;
/// scoped defaults (`with_default`, `set_default`) do not count.
fn set_global<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald(base: Filtered) -> Result<(), LoggerError> {
    let layer = tracing_journald::layer().map_err(LoggerError::Journald)?;
    set_global(base.with(layer))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald(_base: Filtered) -> Result<(), LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}
