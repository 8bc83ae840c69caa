//! Wire identifiers and the wire-role record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Opaque identifier for one qubit.
///
/// Wires carry no role of their own; a wire is a control, the target or a
/// work wire only by its position in a [`WireRoles`] record. The ordering is
/// used to keep ancilla pools deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wire(pub u32);

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u32> for Wire {
    fn from(id: u32) -> Self {
        Wire(id)
    }
}

impl Wire {
    /// `count` consecutive wires starting at `start`.
    pub fn range(start: u32, count: u32) -> Vec<Wire> {
        (start..start + count).map(Wire).collect()
    }
}

/// Which wires play which role in one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRoles {
    /// Control wires, in order.
    pub controls: Vec<Wire>,
    /// The wire flipped when every control is set.
    pub target: Wire,
    /// Auxiliary wires, in order.
    #[serde(default)]
    pub work: Vec<Wire>,
}

impl WireRoles {
    /// Create a new role record.
    pub fn new(
        controls: impl IntoIterator<Item = Wire>,
        target: Wire,
        work: impl IntoIterator<Item = Wire>,
    ) -> Self {
        Self {
            controls: controls.into_iter().collect(),
            target,
            work: work.into_iter().collect(),
        }
    }

    /// Register layout used by the named MCX gates: controls `0..k`, the
    /// target at `k`, work wires from `k + 1`.
    pub fn contiguous(num_controls: u32, num_work: u32) -> Self {
        Self {
            controls: Wire::range(0, num_controls),
            target: Wire(num_controls),
            work: Wire::range(num_controls + 1, num_work),
        }
    }

    /// Number of distinct wires this record names.
    pub fn num_wires(&self) -> usize {
        self.controls.len() + 1 + self.work.len()
    }

    /// All wires in layout order: controls, target, work.
    pub fn all_wires(&self) -> Vec<Wire> {
        let mut wires = Vec::with_capacity(self.num_wires());
        wires.extend_from_slice(&self.controls);
        wires.push(self.target);
        wires.extend_from_slice(&self.work);
        wires
    }

    /// Check whether `wire` has any role in this record.
    pub fn contains(&self, wire: Wire) -> bool {
        self.target == wire || self.controls.contains(&wire) || self.work.contains(&wire)
    }

    /// Check that no wire has more than one role.
    pub fn validate(&self) -> IrResult<()> {
        let mut seen = rustc_hash::FxHashSet::default();
        for wire in self.all_wires() {
            if !seen.insert(wire) {
                return Err(IrError::DuplicateWire {
                    wire,
                    gate_name: None,
                });
            }
        }
        Ok(())
    }
}
