use thiserror::Error;

use crate::batch::Backend;

/// Failures reported by the batch engine.
///
/// The single-block primitives take fixed-size arrays and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested lane backend cannot run on this CPU/OS.
    #[error("{0} backend is not available on this host")]
    Unsupported(Backend),

    /// A batch call was made with zero blocks.
    #[error("no blocks to process")]
    EmptyInput,

    /// The buffer length is not a whole number of 64-byte blocks.
    #[error("buffer of {0} bytes is not a multiple of the 64-byte block size")]
    PartialBlock(usize),

    /// Input and output buffers differ in length.
    #[error("output buffer holds {got} bytes, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// The context is cleared, was never initialized, or belongs to another build.
    #[error("batch context is not valid")]
    InvalidContext,
}

/// Result type of the batch API.
pub type Result<T> = core::result::Result<T, Error>;
