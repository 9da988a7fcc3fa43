// Logging configuration for the NUI page

use std::io;

use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

use crate::core::config::LoggingSettings;

/// Buffers one formatted event and prints it to the browser console on drop
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

/// Route `tracing` events to the browser console.
///
/// No timestamps: the console adds its own, and wasm has no system clock.
pub fn init_logging(settings: &LoggingSettings) {
    if !settings.console {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(settings.level.as_str()))
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
