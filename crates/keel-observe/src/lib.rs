//! Process-wide logging setup for applications built on the keel crates.
//!
//! Library crates only emit through `tracing`; binaries call [`logger_init`] once at startup.
//! The installed filter always lets `keel_core` warnings through (deprecated query helpers,
//! for one), independent of the application's own level.

mod logger;
pub use logger::*;
