//! Per-read zlib measurement.

use crate::record::ReadCompressibility;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::{self, Write};

/// A sink that discards everything written to it and only counts bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingSink {
    written: usize,
}

impl CountingSink {
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl Write for CountingSink {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written += buf.len();
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accumulates the sequence of exactly one read into a fresh zlib stream.
///
/// Dropping a meter without calling [`finish`](Self::finish) discards it.
pub struct CompressionMeter {
    name: String,
    raw_len: usize,
    encoder: ZlibEncoder<CountingSink>,
}

impl CompressionMeter {
    pub fn start(name: String) -> Self {
        Self {
            name,
            raw_len: 0,
            encoder: ZlibEncoder::new(CountingSink::default(), Compression::default()),
        }
    }

    /// Feed one sequence line; the line terminator is compressed but not
    /// counted towards the raw length.
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.raw_len += line.len();
        self.encoder.write_all(line)?;
        self.encoder.write_all(b"\n")
    }

    /// Close the zlib stream and report the read's sizes.
    pub fn finish(self) -> io::Result<ReadCompressibility> {
        let sink = self.encoder.finish()?;
        Ok(ReadCompressibility {
            name: self.name,
            raw_len: self.raw_len,
            compressed_len: sink.written(),
        })
    }
}

/// Measure a single sequence in one call.
pub fn measure(name: impl Into<String>, seq: &[u8]) -> io::Result<ReadCompressibility> {
    let mut meter = CompressionMeter::start(name.into());
    meter.write_line(seq)?;
    meter.finish()
}
