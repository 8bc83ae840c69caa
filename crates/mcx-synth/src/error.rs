//! Error types for the synth crate.

use thiserror::Error;

/// Errors produced by MCX synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Caller-supplied wires or sizes violate a builder precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A builder's own intermediate state broke a structural invariant.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// Configuration could not be parsed or is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Gate sequence builder returned an error.
    #[error("Gate sequence error: {0}")]
    Ir(#[from] mcx_ir::IrError),
}

impl SynthError {
    /// Whether the error blames the caller rather than the builder.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SynthError::InvalidInput(_) | SynthError::Config(_))
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
