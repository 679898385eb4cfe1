use crate::error::{CompressibilityError, IoContext};
use crate::lines::LineSource;
use crate::measure::CompressionMeter;
use crate::options::RunOptions;
use crate::record::ReadCompressibility;
use crate::source::InputSource;

use std::iter::FusedIterator;
use std::path::Path;

const LINES_PER_RECORD: usize = 4;
const SEQUENCE_OFFSET: usize = 1;

/// Totals for one run, threaded through the reader rather than kept globally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Lines consumed from each input (inputs move in lock-step).
    pub lines: u64,
    /// Reads measured and handed out.
    pub reads: u64,
}

/// Reads N FASTQ inputs in lock-step, one physical line per input at a
/// time, and yields one compression measurement per complete record cycle.
///
/// Only the primary input's (index 0) sequence is measured; mates are read
/// to keep the cycle aligned and, optionally, to check read names.
pub struct SyncedReader {
    streams: Vec<LineSource>,
    opts: RunOptions,
    counters: RunCounters,
    finished: bool,
}

impl SyncedReader {
    pub fn new(streams: Vec<LineSource>, opts: RunOptions) -> Self {
        Self {
            streams,
            opts,
            counters: RunCounters::default(),
            finished: false,
        }
    }

    /// Open every path (`.gz` is decoded transparently). No paths reads
    /// a single input from stdin.
    pub fn from_paths<P: AsRef<Path>>(
        paths: &[P],
        opts: RunOptions,
    ) -> Result<Self, CompressibilityError> {
        let streams = if paths.is_empty() {
            vec![LineSource::open(&InputSource::Stdin)?]
        } else {
            paths
                .iter()
                .map(|p| LineSource::open(&InputSource::from_path(Some(p.as_ref()))))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Self::new(streams, opts))
    }

    #[inline]
    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// Next measured read. `None` once the primary input is exhausted or
    /// the limit is reached; after an error the reader yields nothing more.
    pub fn next(&mut self) -> Option<Result<ReadCompressibility, CompressibilityError>> {
        if self.finished {
            return None;
        }
        match self.read_cycle() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }

    fn read_cycle(&mut self) -> Result<Option<ReadCompressibility>, CompressibilityError> {
        if self.streams.is_empty() || self.opts.limit_reached(self.counters.reads) {
            return Ok(None);
        }

        let Some(name) = self.read_headers()? else {
            return Ok(None);
        };
        let mut meter = CompressionMeter::start(name);

        for offset in 1..LINES_PER_RECORD {
            for idx in 0..self.streams.len() {
                if !self.pull(idx, offset)? {
                    return Ok(None);
                }
                if offset == SEQUENCE_OFFSET && idx == 0 {
                    let ctx = self.ctx(0);
                    meter
                        .write_line(self.streams[0].line())
                        .map_err(|e| CompressibilityError::io_err(e, ctx))?;
                }
            }
            self.counters.lines += 1;
        }

        let ctx = self.ctx(0);
        let rec = meter
            .finish()
            .map_err(|e| CompressibilityError::io_err(e, ctx))?;
        self.counters.reads += 1;
        Ok(Some(rec))
    }

    /// Header position of the cycle. Returns the primary read name, or
    /// `None` when the primary input is exhausted.
    fn read_headers(&mut self) -> Result<Option<String>, CompressibilityError> {
        let line = self.counters.lines + 1;
        let mut primary = Vec::new();

        for idx in 0..self.streams.len() {
            if !self.pull(idx, 0)? {
                return Ok(None);
            }
            let header = self.streams[idx].line();
            let Some(id) = read_identity(header) else {
                return Err(CompressibilityError::MalformedRecord {
                    stream: idx,
                    line,
                    content: String::from_utf8_lossy(header).into_owned(),
                });
            };
            // names compare as raw bytes; decoding is only for display
            if idx == 0 {
                primary = id.to_vec();
            } else if self.opts.check_names && id != primary.as_slice() {
                return Err(CompressibilityError::NameMismatch {
                    expected: String::from_utf8_lossy(&primary).into_owned(),
                    found: String::from_utf8_lossy(id).into_owned(),
                    line,
                    stream: idx,
                });
            }
        }

        self.counters.lines += 1;
        Ok(Some(String::from_utf8_lossy(&primary).into_owned()))
    }

    /// Advance input `idx` by one line. `Ok(false)` means the primary input
    /// ended cleanly; a mate running dry first is a desync.
    fn pull(&mut self, idx: usize, offset: usize) -> Result<bool, CompressibilityError> {
        let ctx = self.ctx(idx);
        let n = self.streams[idx]
            .read_line()
            .map_err(|e| CompressibilityError::io_err(e, ctx))?;
        if n > 0 {
            return Ok(true);
        }
        if idx > 0 {
            return Err(CompressibilityError::Desync {
                stream: idx,
                line: ctx.line_num,
            });
        }
        if offset > 0 {
            log::warn!(
                "input 0 ended inside a record at line {}; dropping the incomplete read",
                ctx.line_num
            );
        }
        self.ensure_mates_exhausted(ctx.line_num)?;
        Ok(false)
    }

    /// The primary input is done; every mate must be done as well.
    fn ensure_mates_exhausted(&mut self, line: u64) -> Result<(), CompressibilityError> {
        for idx in 1..self.streams.len() {
            let ctx = self.ctx(idx);
            let n = self.streams[idx]
                .read_line()
                .map_err(|e| CompressibilityError::io_err(e, ctx))?;
            if n > 0 {
                return Err(CompressibilityError::Desync { stream: 0, line });
            }
        }
        Ok(())
    }

    #[inline]
    fn ctx(&self, stream: usize) -> IoContext {
        IoContext {
            stream,
            line_num: self.counters.lines + 1,
        }
    }
}

/// Read name: the text after `@` up to the first space. `None` if the line
/// is not a header.
fn read_identity(header: &[u8]) -> Option<&[u8]> {
    let rest = header.strip_prefix(b"@")?;
    Some(
        rest.iter()
            .position(|&b| b == b' ')
            .map_or(rest, |end| &rest[..end]),
    )
}

impl Iterator for SyncedReader {
    type Item = Result<ReadCompressibility, CompressibilityError>;
    fn next(&mut self) -> Option<Self::Item> {
        SyncedReader::next(self)
    }
}

impl FusedIterator for SyncedReader {}
