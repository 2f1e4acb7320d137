//! Diagnostic output channels.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

/// Destination for the lines written by the target functions.
pub trait OutputChannel {
    /// Write one line to the channel.
    fn write_line(&self, line: &str);
}

impl<C: OutputChannel + ?Sized> OutputChannel for &C {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

/// Channel writing newline-terminated lines to an [`io::Write`] sink.
///
/// Write failures are logged and otherwise ignored.
#[derive(Debug, Default)]
pub struct WriterChannel<W> {
    writer: Mutex<W>,
}

impl<W> WriterChannel<W> {
    /// Wrap `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Release the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> OutputChannel for WriterChannel<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writeln!(writer, "{line}") {
            warn!(%error, "failed to write diagnostic line");
        }
    }
}

/// Channel writing to standard output.
pub type StdoutChannel = WriterChannel<io::Stdout>;

impl WriterChannel<io::Stdout> {
    /// Channel over the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// Channel capturing lines in memory for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingChannel {
    /// Create an empty recording channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl OutputChannel for RecordingChannel {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_channel_keeps_lines_in_order() {
        let channel = RecordingChannel::new();
        channel.write_line("first");
        channel.write_line("second");
        assert_eq!(channel.lines(), vec!["first", "second"]);
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let channel = RecordingChannel::new();
        let clone = channel.clone();
        clone.write_line("shared");
        assert_eq!(channel.lines(), vec!["shared"]);
    }

    #[test]
    fn references_forward_to_the_channel() {
        let channel = RecordingChannel::new();
        let borrowed = &channel;
        OutputChannel::write_line(&borrowed, "forwarded");
        assert_eq!(channel.lines(), vec!["forwarded"]);
    }

    #[test]
    fn writer_channel_terminates_each_line() {
        let channel = WriterChannel::new(Vec::new());
        channel.write_line("foo");
        channel.write_line("bar");
        assert_eq!(channel.into_inner(), b"foo\nbar\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_swallowed() {
        let channel = WriterChannel::new(BrokenPipe);
        channel.write_line("lost");
        channel.write_line("also lost");
    }
}
