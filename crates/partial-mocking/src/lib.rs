//! Functions that exist to be partially mocked.
//!
//! Four functions write a fixed line to a diagnostic [`OutputChannel`].
//! Test suites replace `mock_one`, `mock_two`, and `mock_three` with doubles
//! while `unmocked_function` keeps its real behaviour, showing that sibling
//! behaviours of one module can be substituted independently.
//!
//! The functions are available both as free functions writing to standard
//! output and through the [`TargetFunctions`] trait, which is the seam test
//! doubles implement.
//!
//! # Example
//!
//! ```
//! use partial_mocking::{RealTargets, StdoutChannel, TargetFunctions};
//!
//! let targets = RealTargets::new(StdoutChannel::stdout());
//! targets.unmocked_function();
//! ```

mod channel;
mod targets;

#[cfg(any(test, feature = "test-support"))]
pub use channel::RecordingChannel;
pub use channel::{OutputChannel, StdoutChannel, WriterChannel};
pub use targets::{
    MOCK_ONE_OUTPUT, MOCK_THREE_OUTPUT, MOCK_TWO_OUTPUT, RealTargets, TargetFunctions,
    UNMOCKED_OUTPUT, mock_one, mock_three, mock_two, unmocked_function,
};
