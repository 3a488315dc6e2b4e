//! Plain data types shared by the keel crates.
//!
//! Nothing here has behaviour beyond parsing and small derivations; the executors that consume
//! these types live in `keel-core`.

mod domain;
pub use domain::*;
