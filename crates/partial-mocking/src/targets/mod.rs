//! The functions targeted by partial mocking.

use crate::channel::{OutputChannel, StdoutChannel};

/// Line written by [`TargetFunctions::mock_one`].
pub const MOCK_ONE_OUTPUT: &str = "foo";
/// Line written by [`TargetFunctions::mock_two`].
pub const MOCK_TWO_OUTPUT: &str = "bar";
/// Line written by [`TargetFunctions::mock_three`].
pub const MOCK_THREE_OUTPUT: &str = "baz";
/// Line written by [`TargetFunctions::unmocked_function`].
pub const UNMOCKED_OUTPUT: &str = "I am not mocked";

/// The four functions of the module, as a substitutable seam.
#[cfg_attr(test, mockall::automock)]
pub trait TargetFunctions {
    /// Write [`MOCK_ONE_OUTPUT`].
    fn mock_one(&self);
    /// Write [`MOCK_TWO_OUTPUT`].
    fn mock_two(&self);
    /// Write [`MOCK_THREE_OUTPUT`].
    fn mock_three(&self);
    /// Write [`UNMOCKED_OUTPUT`].
    fn unmocked_function(&self);
}

/// Real implementation writing each function's line to a channel.
#[derive(Debug, Clone, Default)]
pub struct RealTargets<C> {
    channel: C,
}

impl<C> RealTargets<C> {
    /// Wrap `channel` with the real implementations.
    #[must_use]
    pub const fn new(channel: C) -> Self {
        Self { channel }
    }

    /// The channel the functions write to.
    #[must_use]
    pub const fn channel(&self) -> &C {
        &self.channel
    }
}

impl<C: OutputChannel> TargetFunctions for RealTargets<C> {
    fn mock_one(&self) {
        self.channel.write_line(MOCK_ONE_OUTPUT);
    }

    fn mock_two(&self) {
        self.channel.write_line(MOCK_TWO_OUTPUT);
    }

    fn mock_three(&self) {
        self.channel.write_line(MOCK_THREE_OUTPUT);
    }

    fn unmocked_function(&self) {
        self.channel.write_line(UNMOCKED_OUTPUT);
    }
}

fn stdout_targets() -> RealTargets<StdoutChannel> {
    RealTargets::new(StdoutChannel::stdout())
}

/// Write [`MOCK_ONE_OUTPUT`] to standard output.
pub fn mock_one() {
    stdout_targets().mock_one();
}

/// Write [`MOCK_TWO_OUTPUT`] to standard output.
pub fn mock_two() {
    stdout_targets().mock_two();
}

/// Write [`MOCK_THREE_OUTPUT`] to standard output.
pub fn mock_three() {
    stdout_targets().mock_three();
}

/// Write [`UNMOCKED_OUTPUT`] to standard output.
pub fn unmocked_function() {
    stdout_targets().unmocked_function();
}
