//! Hua Dict Library
//!
//! A prefix dictionary built on a fixed-branching character trie. Words are
//! counted as they are inserted, and those counts rank autocomplete
//! suggestions.
//!
//! # Architecture
//!
//! - [`data_structures::hua_trie`] holds the dictionary engine.
//! - [`loader`] fills a dictionary from a word list.
//! - [`config`] and [`logging`] carry the settings the binaries run with.
//! - [`error`] defines the crate-wide error type.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Hua Dict.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and the global configuration.
pub fn init(config: config::HuaConfig) {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    config::init_global_config(config);
}
