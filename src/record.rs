/// Compression measurement of one read (or read pair).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadCompressibility {
    pub name: String,
    /// Sequence bytes fed to the compressor, excluding line terminators.
    pub raw_len: usize,
    /// Size of the finished zlib stream, header and trailer included.
    pub compressed_len: usize,
}

impl ReadCompressibility {
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.raw_len as f64 / self.compressed_len as f64
    }
}
