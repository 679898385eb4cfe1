use crate::record::ReadCompressibility;

use std::io::{self, Write};

/// Writes one tab-separated row per read: name, raw length, compressed
/// length, ratio with four decimals.
pub struct RowWriter<W: Write> {
    inner: W,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_row(&mut self, rec: &ReadCompressibility) -> io::Result<()> {
        writeln!(
            self.inner,
            "{}\t{}\t{}\t{:.4}",
            rec.name,
            rec.raw_len,
            rec.compressed_len,
            rec.ratio()
        )
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
