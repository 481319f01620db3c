//! Device writer and cursor visibility guard.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crossterm::cursor::{Hide, Show};
use crossterm::{queue, Command};

use crate::error::RenderError;

/// Writes rendered output to the terminal device.
///
/// A single coarse lock serializes whole writes, so output of concurrent
/// renders never interleaves inside one escape sequence.
pub struct ConsoleWriter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleWriter {
    /// Writer for the process's stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // A poisoned lock only means another writer panicked mid-write;
        // the device itself is still usable.
        self.out.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write `output` and flush.
    pub fn write(&self, output: &str) -> Result<(), RenderError> {
        let mut out = self.lock();
        out.write_all(output.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write `output` followed by a newline.
    pub fn write_line(&self, output: &str) -> Result<(), RenderError> {
        let mut line = String::with_capacity(output.len() + 1);
        line.push_str(output);
        line.push('\n');
        self.write(&line)
    }

    /// Queue a terminal command and flush.
    pub fn command(&self, command: impl Command) -> Result<(), RenderError> {
        let mut out = self.lock();
        queue!(out, command)?;
        out.flush()?;
        Ok(())
    }

    /// Hide the cursor until the returned guard is dropped.
    pub fn hide_cursor(&self) -> Result<CursorGuard<'_>, RenderError> {
        self.command(Hide)?;
        Ok(CursorGuard { writer: self })
    }
}

/// Restores cursor visibility when dropped, on every exit path.
pub struct CursorGuard<'a> {
    writer: &'a ConsoleWriter,
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.writer.command(Show) {
            tracing::warn!(error = %e, "failed to restore cursor visibility");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Write sink that records everything into a shared buffer.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn write_and_write_line() {
        let capture = Capture::default();
        let writer = ConsoleWriter::new(Box::new(capture.clone()));
        writer.write("a").unwrap();
        writer.write_line("b").unwrap();
        assert_eq!(capture.text(), "ab\n");
    }

    #[test]
    fn commands_are_written_as_escape_sequences() {
        let capture = Capture::default();
        let writer = ConsoleWriter::new(Box::new(capture.clone()));
        writer.command(crossterm::cursor::MoveTo(4, 2)).unwrap();
        writer.command(Hide).unwrap();
        assert_eq!(capture.text(), "\x1b[3;5H\x1b[?25l");
    }

    #[test]
    fn cursor_guard_restores_on_drop() {
        let capture = Capture::default();
        let writer = ConsoleWriter::new(Box::new(capture.clone()));
        {
            let _guard = writer.hide_cursor().unwrap();
            writer.write("body").unwrap();
        }
        assert_eq!(capture.text(), "\x1b[?25lbody\x1b[?25h");
    }

    #[test]
    fn cursor_guard_restores_on_early_return() {
        fn failing(writer: &ConsoleWriter) -> Result<(), RenderError> {
            let _guard = writer.hide_cursor()?;
            Err(RenderError::Cancelled)
        }

        let capture = Capture::default();
        let writer = ConsoleWriter::new(Box::new(capture.clone()));
        assert!(failing(&writer).is_err());
        assert!(capture.text().ends_with("\x1b[?25h"));
    }
}
