use thiserror::Error;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format `{0}` (expected: text|json|journald)")]
    InvalidFormat(String),
    #[error("journald output requires Linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("cannot connect to journald: {0}")]
    Journald(#[source] std::io::Error),
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("invalid log filter `{directives}`: {source}")]
    InvalidFilter {
        directives: String,
        #[source]
        source: ParseError,
    },
}
