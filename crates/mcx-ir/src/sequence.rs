//! Ordered gate sequences.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::IrResult;
use crate::gate::GateOp;
use crate::wire::Wire;

/// An ordered list of gates.
///
/// This is the output type of every synthesis routine and provides the
/// operations they need from a host circuit: appending Toffoli and NOT gates,
/// splicing another sequence under a wire mapping, and inversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSequence {
    /// Optional name, used by named gate definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// The gates, in application order.
    ops: Vec<GateOp>,
}

impl GateSequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty sequence with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ops: vec![],
        }
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn toffoli(&mut self, c1: Wire, c2: Wire, target: Wire) -> IrResult<&mut Self> {
        self.push(GateOp::Toffoli(c1, c2, target))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, wire: Wire) -> IrResult<&mut Self> {
        self.push(GateOp::Not(wire))
    }

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: Wire, target: Wire) -> IrResult<&mut Self> {
        self.push(GateOp::Cx(control, target))
    }

    /// Append an arbitrary gate after checking its operands are distinct.
    pub fn push(&mut self, op: GateOp) -> IrResult<&mut Self> {
        op.check_distinct()?;
        self.ops.push(op);
        Ok(self)
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Append every gate of `other`, wires unchanged.
    pub fn append(&mut self, other: &GateSequence) -> &mut Self {
        self.ops.extend_from_slice(&other.ops);
        self
    }

    /// Append `other` with its wire `Wire(i)` mapped to `mapping[i]`.
    ///
    /// Nothing is appended if any wire of `other` falls outside the mapping.
    pub fn compose(&mut self, other: &GateSequence, mapping: &[Wire]) -> IrResult<&mut Self> {
        let mapped = other
            .ops
            .iter()
            .map(|op| -> IrResult<GateOp> {
                let op = op.remap(mapping)?;
                op.check_distinct()?;
                Ok(op)
            })
            .collect::<IrResult<Vec<_>>>()?;
        self.ops.extend(mapped);
        Ok(self)
    }

    /// The inverse sequence: same gates in reverse order.
    #[must_use]
    pub fn inverse(&self) -> GateSequence {
        debug_assert!(self.ops.iter().all(GateOp::is_self_inverse));
        Self {
            name: self.name.as_ref().map(|n| format!("{n}_dg")),
            ops: self.ops.iter().rev().copied().collect(),
        }
    }

    /// The sequence without its first `skip` gates.
    #[must_use]
    pub fn tail(&self, skip: usize) -> GateSequence {
        Self {
            name: self.name.clone(),
            ops: self.ops.iter().skip(skip).copied().collect(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the sequence name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the gates in application order.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Iterate over the gates.
    pub fn iter(&self) -> std::slice::Iter<'_, GateOp> {
        self.ops.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the sequence has no gates.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of Toffoli gates.
    pub fn toffoli_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, GateOp::Toffoli(..)))
            .count()
    }

    /// Number of NOT gates.
    pub fn not_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, GateOp::Not(_)))
            .count()
    }

    /// Gate counts keyed by gate name.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for op in &self.ops {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Length of the longest chain of gates that pairwise share a wire.
    pub fn depth(&self) -> usize {
        let mut frontier: FxHashMap<Wire, usize> = FxHashMap::default();
        let mut max_depth = 0usize;

        for op in &self.ops {
            let wires = op.wires();
            let node_depth = wires
                .iter()
                .map(|w| frontier.get(w).copied().unwrap_or(0))
                .max()
                .unwrap_or(0)
                + 1;
            for w in wires {
                frontier.insert(w, node_depth);
            }
            max_depth = max_depth.max(node_depth);
        }

        max_depth
    }

    /// Every wire touched by at least one gate.
    pub fn wires(&self) -> FxHashSet<Wire> {
        self.ops.iter().flat_map(GateOp::wires).collect()
    }
}

impl IntoIterator for GateSequence {
    type Item = GateOp;
    type IntoIter = std::vec::IntoIter<GateOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a GateOp;
    type IntoIter = std::slice::Iter<'a, GateOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl FromIterator<GateOp> for GateSequence {
    fn from_iter<I: IntoIterator<Item = GateOp>>(iter: I) -> Self {
        Self {
            name: None,
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<GateOp> for GateSequence {
    fn extend<I: IntoIterator<Item = GateOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}
