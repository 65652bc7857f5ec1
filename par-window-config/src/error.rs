//! Typed error variants for the par-window-config crate.
//!
//! `WindowOptions::load_from` and `WindowOptions::save_to` return
//! `anyhow::Result`; callers that need to match on the failure mode can
//! downcast to [`ConfigError`].
//!
//! ```rust,no_run
//! use par_window_config::ConfigError;
//!
//! fn describe(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading, saving or validating window options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the options file.
    #[error("I/O error reading window options: {0}")]
    Io(#[from] std::io::Error),

    /// The options file contained invalid YAML.
    #[error("YAML parse error in window options: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the reason.
    #[error("Window options validation error: {0}")]
    Validation(String),
}
