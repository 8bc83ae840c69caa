//! Gate-Sequence Substrate for MCX Synthesis
//!
//! This crate provides the small circuit model the synthesis crate builds on:
//! opaque wires, the wire-role record, the three self-inverse gates the
//! constructions emit, and an ordered gate sequence with composition and
//! inversion.
//!
//! # Core Components
//!
//! - **Wires**: [`Wire`] identifies a qubit; [`WireRoles`] assigns control,
//!   target and work roles for one synthesis call
//! - **Gates**: [`GateOp`] is one of Toffoli, NOT or CNOT
//! - **Sequences**: [`GateSequence`] appends gates, composes other sequences
//!   under a wire mapping, inverts, and reports counts and depth
//!
//! # Example: Computing and Uncomputing an AND
//!
//! ```rust
//! use mcx_ir::{GateSequence, Wire};
//!
//! let mut and = GateSequence::named("and");
//! and.toffoli(Wire(0), Wire(1), Wire(2)).unwrap();
//!
//! let mut seq = GateSequence::new();
//! seq.append(&and);
//! seq.x(Wire(3)).unwrap();
//! seq.append(&and.inverse());
//!
//! assert_eq!(seq.toffoli_count(), 2);
//! assert_eq!(seq.depth(), 2);
//! ```

pub mod error;
pub mod gate;
pub mod sequence;
pub mod wire;

pub use error::{IrError, IrResult};
pub use gate::GateOp;
pub use sequence::GateSequence;
pub use wire::{Wire, WireRoles};
