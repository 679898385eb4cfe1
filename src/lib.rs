//! Per-read sequence complexity of FASTQ data, measured as the zlib
//! compression ratio of each read.
//!
//! - Single-end or paired-end: N inputs are read in lock-step, one line each.
//! - Plain and `.gz` inputs and outputs, stdin/stdout fallback.
//! - Optional read-name consistency check across paired inputs.
//! - One tab-separated row per read: name, raw length, compressed length, ratio.
//!
//! Only the primary input's sequence is measured; mates keep the record
//! cycle aligned and are checked for matching names.

pub mod emit;
pub mod error;
pub mod lines;
pub mod measure;
pub mod options;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod source;

pub use crate::emit::RowWriter;
pub use crate::error::{CompressibilityError, IoContext};
pub use crate::lines::LineSource;
pub use crate::measure::{CompressionMeter, CountingSink, measure};
pub use crate::options::{Config, RunOptions};
pub use crate::pipeline::{measure_files, run};
pub use crate::reader::{RunCounters, SyncedReader};
pub use crate::record::ReadCompressibility;
pub use crate::source::{InputSource, OutputSink};
