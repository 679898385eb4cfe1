use std::path::PathBuf;

/// Knobs for one measurement run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many reads. `None` reads to the end of the primary input.
    pub limit: Option<u64>,
    /// Require every mate's read name to match the primary input's.
    pub check_names: bool,
}

impl RunOptions {
    /// Build from CLI-style values where a limit of `0` means unlimited.
    pub fn new(limit: u64, check_names: bool) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
            check_names,
        }
    }

    #[inline]
    pub(crate) fn limit_reached(&self, reads: u64) -> bool {
        self.limit.is_some_and(|limit| reads >= limit)
    }
}

/// Everything a run needs: where to read, where to write, and how.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Zero paths reads a single stream from stdin.
    pub inputs: Vec<PathBuf>,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub options: RunOptions,
}
