//! The diagnostic trail: an append-only, line oriented text sink shared by all workers.
//! Failures are logged and otherwise ignored, the trail is not authoritative output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use log::warn;

type Sink = Box<dyn Write + Send>;

/// Serialized, flushed-per-line writer for diagnostic records
pub struct DiagnosticWriter {
  sink: Mutex<Option<Sink>>,
}

impl DiagnosticWriter {
  /// Opens (truncating) `path`. If that fails, the writer is disabled and drops every record.
  pub fn create<P: AsRef<Path>>(path: P) -> Self {
    let path = path.as_ref();
    match File::create(path) {
      Ok(file) => DiagnosticWriter::from_writer(BufWriter::new(file)),
      Err(e) => {
        warn!(
          "could not open diagnostic output {}: {}; diagnostics are disabled",
          path.display(),
          e
        );
        DiagnosticWriter::disabled()
      },
    }
  }

  /// Writes records to an arbitrary sink
  pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
    DiagnosticWriter {
      sink: Mutex::new(Some(Box::new(writer))),
    }
  }

  /// A writer that drops everything
  pub fn disabled() -> Self {
    DiagnosticWriter {
      sink: Mutex::new(None),
    }
  }

  /// true while records still reach a sink
  pub fn is_enabled(&self) -> bool {
    match self.sink.lock() {
      Ok(sink) => sink.is_some(),
      Err(_) => false,
    }
  }

  /// Appends `line` and a newline, then flushes
  pub fn record(&self, line: &str) {
    let mut guard = match self.sink.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(ref mut sink) = *guard {
      if let Err(e) = write_line(sink, line) {
        warn!("could not write diagnostic record: {}", e);
      }
    }
  }

  /// Flushes and releases the sink
  pub fn close(&self) {
    let mut guard = match self.sink.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(mut sink) = guard.take() {
      if let Err(e) = sink.flush() {
        warn!("could not flush diagnostic output: {}", e);
      }
    }
  }
}

fn write_line(sink: &mut Sink, line: &str) -> io::Result<()> {
  sink.write_all(line.as_bytes())?;
  sink.write_all(b"\n")?;
  sink.flush()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  #[derive(Clone, Default)]
  struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

  impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
  }

  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
  }

  #[test]
  fn records_are_newline_terminated() {
    let buffer = SharedBuffer::default();
    let writer = DiagnosticWriter::from_writer(buffer.clone());
    writer.record("first");
    writer.record("second");
    writer.close();
    assert!(!writer.is_enabled());
    writer.record("dropped");
    let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_eq!(written, "first\nsecond\n");
  }

  #[test]
  fn write_failures_are_swallowed() {
    let writer = DiagnosticWriter::from_writer(BrokenPipe);
    writer.record("lost");
    assert!(writer.is_enabled());
  }

  #[test]
  fn unopenable_path_disables_writer() {
    let writer = DiagnosticWriter::create("/nonexistent-directory/diagnostics.txt");
    assert!(!writer.is_enabled());
    writer.record("lost");
  }
}
