//! Multi-controlled-X synthesis with conditionally clean ancillae.
//!
//! Decomposes an MCX gate on k controls into Toffoli and X gates following
//! Khattar & Gidney, "Rise of conditionally clean ancillae for optimizing
//! quantum circuits" (arXiv:2407.17966):
//!
//! - **Linear depth**, one work wire: [`mcx_linear`] built on [`linear_ladder`]
//! - **Log depth**, two work wires: [`mcx_log`] built on [`log_ladder`] and
//!   [`parallel_ccx_block`], finishing with [`mcx_linear`]
//!
//! | Construction | Work wires | Toffolis (clean) | Toffolis (dirty) | Depth |
//! |--------------|-----------|------------------|------------------|-------|
//! | linear       | 1         | 2k − 3           | 4k − 8           | O(k)  |
//! | log          | 2         | 2k − 3           | 4k − 8           | O(log k) |
//!
//! Every routine is a pure function of its wire layout and returns a
//! [`GateSequence`](mcx_ir::GateSequence). [`McxGate`] wraps both
//! constructions as named gates with a fixed register layout.
//!
//! # Quick start
//!
//! ```rust
//! use mcx_ir::{Wire, WireRoles};
//! use mcx_synth::{AncillaState, mcx_log};
//!
//! // 8 controls on wires 0..8, target 8, work wires 9 and 10.
//! let roles = WireRoles::new(Wire::range(0, 8), Wire(8), [Wire(9), Wire(10)]);
//! let seq = mcx_log(&roles, AncillaState::Clean).unwrap();
//! assert_eq!(seq.toffoli_count(), 2 * 8 - 3);
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod linear;
pub mod log;
pub mod parallel;

pub use config::{AncillaState, SynthesisConfig};
pub use error::{SynthError, SynthResult};
pub use gate::{McxGate, McxStrategy, ParallelCcxGate};
pub use linear::{LinearLadder, linear_ladder, mcx_linear};
pub use log::{LogLadder, LogLadderBuilder, log_ladder, mcx_log};
pub use parallel::parallel_ccx_block;
