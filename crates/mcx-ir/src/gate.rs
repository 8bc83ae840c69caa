//! Gate operations.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::wire::Wire;

/// A single gate applied to concrete wires.
///
/// Every variant is a classical permutation of basis states and its own
/// inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateOp {
    /// Toffoli (CCX): flips the third wire iff the first two are set.
    Toffoli(Wire, Wire, Wire),
    /// Pauli-X.
    Not(Wire),
    /// Controlled-X (CNOT).
    Cx(Wire, Wire),
}

impl GateOp {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Toffoli(..) => "ccx",
            GateOp::Not(_) => "x",
            GateOp::Cx(..) => "cx",
        }
    }

    /// Get the number of wires this gate operates on.
    #[inline]
    pub fn num_wires(&self) -> usize {
        match self {
            GateOp::Not(_) => 1,
            GateOp::Cx(..) => 2,
            GateOp::Toffoli(..) => 3,
        }
    }

    /// Operand wires, controls first.
    pub fn wires(&self) -> Vec<Wire> {
        match *self {
            GateOp::Toffoli(a, b, c) => vec![a, b, c],
            GateOp::Not(q) => vec![q],
            GateOp::Cx(c, t) => vec![c, t],
        }
    }

    /// The wire whose value this gate may change.
    pub fn target(&self) -> Wire {
        match *self {
            GateOp::Toffoli(_, _, t) | GateOp::Not(t) | GateOp::Cx(_, t) => t,
        }
    }

    /// Whether the gate is its own inverse. True for every variant.
    pub fn is_self_inverse(&self) -> bool {
        true
    }

    /// Check that the operand wires are pairwise distinct.
    pub fn check_distinct(&self) -> IrResult<()> {
        let duplicate = match *self {
            GateOp::Toffoli(a, b, c) => {
                if a == b || a == c {
                    Some(a)
                } else if b == c {
                    Some(b)
                } else {
                    None
                }
            }
            GateOp::Cx(c, t) => (c == t).then_some(c),
            GateOp::Not(_) => None,
        };
        match duplicate {
            Some(wire) => Err(IrError::DuplicateWire {
                wire,
                gate_name: Some(self.name().into()),
            }),
            None => Ok(()),
        }
    }

    /// Rewrite every operand `Wire(i)` as `mapping[i]`.
    pub fn remap(&self, mapping: &[Wire]) -> IrResult<GateOp> {
        let map = |w: Wire| {
            mapping
                .get(w.0 as usize)
                .copied()
                .ok_or(IrError::WireNotFound {
                    wire: w,
                    mapping_len: mapping.len(),
                })
        };
        Ok(match *self {
            GateOp::Toffoli(a, b, c) => GateOp::Toffoli(map(a)?, map(b)?, map(c)?),
            GateOp::Not(q) => GateOp::Not(map(q)?),
            GateOp::Cx(c, t) => GateOp::Cx(map(c)?, map(t)?),
        })
    }
}
