use std::io;

use crate::config::DemoConfig;

/// Writer that sends one formatted record to the browser console
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}

/// Install global subscriber
pub fn init(config: &DemoConfig) -> anyhow::Result<()> {
    // No system clock on wasm32-unknown-unknown
    tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_max_level(config.log_level()?)
        .init();
    Ok(())
}
