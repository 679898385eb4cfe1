use crate::error::CompressibilityError;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const BUF_CAPACITY: usize = 256 * 1024;

fn is_gzip_path(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Where an input stream's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Plain(PathBuf),
    /// `.gz` suffix; decoded with a multi-member decoder so BGZF works too.
    Gzip(PathBuf),
}

impl InputSource {
    /// Pick a variant by suffix. No path means stdin.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            None => Self::Stdin,
            Some(p) if p.as_os_str().is_empty() => Self::Stdin,
            Some(p) if is_gzip_path(p) => Self::Gzip(p.to_path_buf()),
            Some(p) => Self::Plain(p.to_path_buf()),
        }
    }

    /// Open the underlying byte stream behind one buffered interface.
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>, CompressibilityError> {
        let rdr: Box<dyn BufRead + Send> = match self {
            Self::Stdin => Box::new(BufReader::with_capacity(BUF_CAPACITY, io::stdin())),
            Self::Plain(path) => {
                let f = File::open(path).map_err(|e| CompressibilityError::open_err(e, path))?;
                Box::new(BufReader::with_capacity(BUF_CAPACITY, f))
            }
            Self::Gzip(path) => {
                let f = File::open(path).map_err(|e| CompressibilityError::open_err(e, path))?;
                let dec = MultiGzDecoder::new(BufReader::with_capacity(BUF_CAPACITY, f));
                Box::new(BufReader::with_capacity(BUF_CAPACITY, dec))
            }
        };
        log::debug!("opened input {self:?}");
        Ok(rdr)
    }
}

/// Destination for result rows: stdout, a plain file, or a gzipped file.
pub enum OutputSink {
    Stdout(BufWriter<io::Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputSink {
    /// Create the sink for `path`; `None` or an empty path means stdout.
    pub fn create(path: Option<&Path>) -> Result<Self, CompressibilityError> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(Self::Stdout(BufWriter::new(io::stdout()))),
        };
        let f = File::create(path).map_err(|e| CompressibilityError::open_err(e, path))?;
        let buffered = BufWriter::with_capacity(BUF_CAPACITY, f);
        log::debug!("writing rows to {}", path.display());
        if is_gzip_path(path) {
            Ok(Self::Gzip(GzEncoder::new(buffered, Compression::default())))
        } else {
            Ok(Self::Plain(buffered))
        }
    }

    /// Write any gzip trailer and flush everything down to the file.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush(),
            Self::Plain(mut w) => w.flush(),
            Self::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}
