//! Browser console logging.
//!
//! `tracing` events are formatted by `tracing-subscriber` and written to the
//! browser console, one console call per event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::LevelFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs the console subscriber. Later calls are ignored.
pub fn init() {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter);

    _ = tracing_subscriber::registry()
        .with(layer)
        .with(LevelFilter::INFO)
        .try_init();
}

/// Creates a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and sends it to the console when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Buffered line without its trailing newline, if anything was written.
    fn message(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();

        (!text.is_empty()).then(|| text.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(message) = self.message() {
            emit(self.level, &message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, message: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(message);

    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG | Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, message: &str) {
    use std::io::Write as _;

    _ = writeln!(io::stderr(), "{message}");
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn writer_buffers_until_dropped() -> TestResult {
        let mut writer = ConsoleWriter::new(Level::INFO);

        write!(writer, " INFO order ")?;
        writeln!(writer, "completed items=2")?;

        assert_eq!(
            writer.message().as_deref(),
            Some(" INFO order completed items=2")
        );

        Ok(())
    }

    #[test]
    fn empty_writer_has_no_message() {
        let writer = ConsoleWriter::new(Level::DEBUG);

        assert_eq!(writer.message(), None);
    }

    #[test]
    fn make_writer_defaults_to_info() {
        let writer = ConsoleMakeWriter.make_writer();

        assert_eq!(writer.level, Level::INFO);
    }
}
