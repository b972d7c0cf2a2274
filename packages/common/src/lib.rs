//! Shared infrastructure for the xxHash vector workspace
//!
//! Currently this is the logging layer used by the generator binary and
//! the vector library.

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
