use crate::error::CompressibilityError;
use crate::source::InputSource;

use std::io::{self, BufRead};

/// Forward-only line scanner over one input stream.
///
/// Lines are kept as raw bytes; the trailing `\n` and then `\r` are stripped,
/// and a last line without a terminator still counts.
pub struct LineSource {
    rdr: Box<dyn BufRead + Send>,
    buf: Vec<u8>,
}

impl LineSource {
    /// Open `source` and scan it line by line.
    pub fn open(source: &InputSource) -> Result<Self, CompressibilityError> {
        Ok(Self::from_boxed(source.open()?))
    }

    /// Wrap an arbitrary `BufRead` (in-memory data, stdin, ...).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::from_boxed(Box::new(reader))
    }

    fn from_boxed(rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            rdr,
            buf: Vec::with_capacity(256),
        }
    }

    /// Advance to the next line. Returns `0` at end of stream, otherwise the
    /// number of raw bytes consumed; the line itself is then in [`line`](Self::line).
    pub fn read_line(&mut self) -> io::Result<usize> {
        self.buf.clear();
        let n = self.rdr.read_until(b'\n', &mut self.buf)?;
        if n > 0 {
            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
            }
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(n)
    }

    /// The most recently read line, without its terminator.
    #[inline]
    pub fn line(&self) -> &[u8] {
        &self.buf
    }
}
