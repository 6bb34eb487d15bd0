use crate::DisplaySink;
use core::fmt::Display;
use std::io::{self, Write};

/// A sink that writes each item on its own line to an [`io::Write`].
///
/// Items are rendered with [`Display`] and the writer is flushed after every
/// item, so interactive output shows up immediately.
///
/// # Example
/// ```
/// use quotepick::{DisplaySink, WriteSink};
///
/// let mut sink = WriteSink::new(Vec::new());
/// sink.show("Talk is cheap. Show me the code.").unwrap();
/// assert_eq!(sink.into_inner(), b"Talk is cheap. Show me the code.\n");
/// ```
#[derive(Debug, Default)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<io::Stdout> {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<T, W> DisplaySink<T> for WriteSink<W>
where
    T: Display + ?Sized,
    W: Write,
{
    type Error = io::Error;

    fn show(&mut self, item: &T) -> io::Result<()> {
        writeln!(self.writer, "{item}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_item() {
        let mut sink = WriteSink::new(Vec::new());
        sink.show("first").unwrap();
        sink.show(&42).unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"first\n42\n");
    }

    #[test]
    fn propagates_writer_errors() {
        let mut sink = WriteSink::new(ClosedPipe);
        let err = sink.show("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
