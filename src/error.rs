use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Where an I/O failure happened: which input (0 = primary) and which
/// 1-based physical line was being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub stream: usize,
    pub line_num: u64,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input {}, line {}", self.stream, self.line_num)
    }
}

#[derive(Debug, Error)]
pub enum CompressibilityError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error in {ctx}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
    #[error("input {stream} ran out of lines at line {line} while the other inputs continued (unequal read counts)")]
    Desync { stream: usize, line: u64 },
    #[error("line {line} of input {stream} should be a fastq header line, got: {content}")]
    MalformedRecord {
        stream: usize,
        line: u64,
        content: String,
    },
    #[error("expecting read {expected} on line {line} in input {stream}, got {found}")]
    NameMismatch {
        expected: String,
        found: String,
        line: u64,
        stream: usize,
    },
}

impl CompressibilityError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn output_err(source: io::Error) -> Self {
        Self::Output { source }
    }
    pub(crate) fn open_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
