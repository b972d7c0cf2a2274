//! Structured logging for vector runs
//!
//! Everything goes through the `log` facade to stderr via `env_logger`.
//! Stdout is reserved for the transcript, so no helper here ever prints.

use log::{debug, error, info};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the workspace
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at startup)
    ///
    /// Levels come from `RUST_LOG`:
    /// - `RUST_LOG=debug` - per-section progress
    /// - `RUST_LOG=info` - run start and completion
    /// - unset - errors only
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
                .format_timestamp_micros()
                .target(env_logger::Target::Stderr)
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log the shape of a run before any record is produced
    pub fn log_run_start(corpus_len: usize, sections: usize) {
        info!("Generating vectors: {corpus_len} inputs across {sections} sections");
    }

    /// Log a finished section
    pub fn log_section(header: &str, records: usize) {
        debug!("Section done: {header} ({records} records)");
    }

    /// Log a completed run
    pub fn log_run_complete(records: usize) {
        info!("Vector run complete: {records} records written");
    }

    /// Log a fatal error without echoing input data
    pub fn log_fatal(operation: &str, error: &dyn std::error::Error) {
        error!(
            "Vector run aborted during {} (error_type: {}): {}",
            operation,
            std::any::type_name_of_val(error),
            error
        );
    }
}
