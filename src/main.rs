use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use read_compressibility::{Config, RunOptions, measure_files};

/// Compute the zlib compression ratio of every read in one or two
/// (paired-end) FASTQ files.
///
/// Options take the double-dash form: --out, --limit, --check.
#[derive(Parser)]
#[command(name = "readcompressibility", version)]
struct Cli {
    /// Input FASTQ files, plain or .gz (none = stdin)
    #[arg(value_name = "FASTQ", num_args = 0..=2)]
    inputs: Vec<PathBuf>,

    /// Output filename, .gz is compressed (default = stdout)
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Limit the number of reads to consider (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    limit: u64,

    /// Check that the read names match (for paired-end data)
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config {
        inputs: cli.inputs,
        output: cli.out.filter(|p| !p.as_os_str().is_empty()),
        options: RunOptions::new(cli.limit, cli.check),
    };

    measure_files(&config).context("read compressibility run failed")?;
    Ok(())
}
