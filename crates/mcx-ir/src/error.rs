//! Error types for the IR crate.

use crate::wire::Wire;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// The same wire appears twice where distinct wires are required.
    #[error("Duplicate wire {wire} in operation{}", format_gate_context(.gate_name))]
    DuplicateWire {
        /// The duplicate wire.
        wire: Wire,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A composed sequence references a wire the mapping does not cover.
    #[error("Wire {wire} not covered by a wire mapping of length {mapping_len}")]
    WireNotFound {
        /// The unmapped wire.
        wire: Wire,
        /// Length of the mapping that was supplied.
        mapping_len: usize,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
