use crate::emit::RowWriter;
use crate::error::CompressibilityError;
use crate::options::Config;
use crate::reader::{RunCounters, SyncedReader};
use crate::source::OutputSink;

use std::io::Write;

/// Drain `reader` into `rows` until the primary input ends, the limit is
/// hit, or the first error.
pub fn run<W: Write>(
    reader: &mut SyncedReader,
    rows: &mut RowWriter<W>,
) -> Result<RunCounters, CompressibilityError> {
    while let Some(rec) = reader.next() {
        rows.write_row(&rec?)
            .map_err(CompressibilityError::output_err)?;
    }
    Ok(reader.counters())
}

/// Open the configured inputs and output, measure every read, and close
/// the output. Rows written before a failure are flushed either way.
pub fn measure_files(config: &Config) -> Result<RunCounters, CompressibilityError> {
    let mut reader = SyncedReader::from_paths(config.inputs.as_slice(), config.options.clone())?;
    let mut rows = RowWriter::new(OutputSink::create(config.output.as_deref())?);

    let result = run(&mut reader, &mut rows);
    let closed = rows
        .into_inner()
        .finish()
        .map_err(CompressibilityError::output_err);

    let counters = result?;
    closed?;
    log::info!(
        "processed {} lines ({} reads)",
        counters.lines,
        counters.reads
    );
    Ok(counters)
}
