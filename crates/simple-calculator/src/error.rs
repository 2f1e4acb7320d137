//! Error types for the simple-calculator crate.

use thiserror::Error;

/// Errors raised while reading a calculator request from JSON.
///
/// Only structural problems surface here. A request whose operands or tag
/// have the wrong type still parses; the calculator answers it with `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The JSON is malformed or a required field is missing.
    #[error("invalid calculator request JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}
