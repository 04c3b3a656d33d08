//! Error taxonomy for per-file processing.

use thiserror::Error;

/// Failure modes of the normalize pipeline. Per-file errors are reported and
/// contained by the batch driver; only `InvalidInput` in single-file mode
/// aborts an invocation.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Bad caller input, e.g. a missing file in single-file mode.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external media tool exited non-zero. `detail` carries its captured
    /// stderr; the original file is left untouched.
    #[error("{tool} failed ({status}): {detail}")]
    ToolFailure {
        tool: String,
        status: String,
        detail: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
