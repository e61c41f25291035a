//! connmodel-logging - Tracing-backed diagnostics
//!
//! This crate provides:
//! - [`TracingSink`] diagnostic sink that forwards to `tracing` events
//! - [`init_logging`] to install a stderr subscriber with an env filter

mod init;
mod sink;

pub use init::{LOCUS_FIELD, init_logging, parse_level};
pub use sink::TracingSink;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{TracingSink, init_logging, parse_level};
}
