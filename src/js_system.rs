use crate::error::DateError;
use std::io::{self, Write};

enum Sink {
    Stdout(io::Stdout),
    Buffer(Vec<u8>),
}

/// The stream `System.getOut()` hands to a script.
pub struct OutputStream {
    sink: Sink,
}

impl OutputStream {
    pub fn stdout() -> Self {
        OutputStream {
            sink: Sink::Stdout(io::stdout()),
        }
    }

    /// An in-memory stream whose contents can be read back with [`OutputStream::captured`].
    pub fn buffer() -> Self {
        OutputStream { sink: Sink::Buffer(Vec::new()) }
    }

    /// `stdout.write(text, len)`.
    ///
    /// `len` is the byte count the caller claims for `text`. The text is
    /// always written in full; a disagreeing count is only logged.
    pub fn write(&mut self, text: &str, len: usize) -> Result<usize, DateError> {
        if len != text.len() {
            log::warn!("write: length {len} does not match {} bytes of {text:?}", text.len());
        }
        log::trace!("write fd=stdout data_len={}", text.len());
        match &mut self.sink {
            Sink::Stdout(out) => {
                let mut lock = out.lock();
                lock.write_all(text.as_bytes())?;
                lock.flush()?;
            }
            Sink::Buffer(buf) => buf.extend_from_slice(text.as_bytes()),
        }
        Ok(text.len())
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> Result<usize, DateError> {
        let text = format!("{line}\n");
        self.write(&text, text.len())
    }

    /// Buffered output so far; `None` unless created with [`OutputStream::buffer`].
    pub fn captured(&self) -> Option<String> {
        match &self.sink {
            Sink::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
            Sink::Stdout(_) => None,
        }
    }
}

impl Default for OutputStream {
    fn default() -> Self {
        OutputStream::stdout()
    }
}
