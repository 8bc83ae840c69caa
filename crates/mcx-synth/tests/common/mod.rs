//! Shared simulation helpers for the integration tests.
//!
//! Toffoli, X and CNOT permute computational basis states, so a sequence is
//! fully characterised by where it sends each basis state. [`run_basis`]
//! does that on a bitmask; [`Statevector`] covers the superposition checks.

#![allow(dead_code)]

use mcx_ir::{GateOp, GateSequence, Wire, WireRoles};
use num_complex::Complex64;

/// Bit position of a wire in a packed basis state.
#[inline]
fn bit(state: u64, wire: Wire) -> u64 {
    (state >> wire.0) & 1
}

/// Apply `seq` to a basis state whose bit `i` is the value of `Wire(i)`.
pub fn run_basis(seq: &GateSequence, mut state: u64) -> u64 {
    for op in seq {
        match *op {
            GateOp::Not(q) => state ^= 1 << q.0,
            GateOp::Cx(c, t) => state ^= bit(state, c) << t.0,
            GateOp::Toffoli(a, b, t) => state ^= (bit(state, a) & bit(state, b)) << t.0,
        }
    }
    state
}

/// Pack control bits (bit `i` of `controls` for `roles.controls[i]`), the
/// target bit and work bits into one basis state.
pub fn pack(roles: &WireRoles, controls: u64, target: u64, work: u64) -> u64 {
    let mut state = 0;
    for (i, w) in roles.controls.iter().enumerate() {
        state |= ((controls >> i) & 1) << w.0;
    }
    state |= (target & 1) << roles.target.0;
    for (i, w) in roles.work.iter().enumerate() {
        state |= ((work >> i) & 1) << w.0;
    }
    state
}

/// Check `seq` maps every basis state exactly as an MCX on `roles` would,
/// leaving the work wires untouched.
///
/// With `dirty_work` every work-wire assignment is tried; otherwise the work
/// wires start at 0.
pub fn assert_implements_mcx(seq: &GateSequence, roles: &WireRoles, dirty_work: bool) {
    let k = roles.controls.len();
    let all_set = (1u64 << k) - 1;
    let work_states: u64 = if dirty_work { 1 << roles.work.len() } else { 1 };

    for work in 0..work_states {
        for target in 0..2 {
            for controls in 0..(1u64 << k) {
                let input = pack(roles, controls, target, work);
                let flipped = target ^ u64::from(controls == all_set);
                let expected = pack(roles, controls, flipped, work);
                let output = run_basis(seq, input);
                assert_eq!(
                    output, expected,
                    "k={k}, controls={controls:#b}, target={target}, work={work:#b}"
                );
            }
        }
    }
}

/// Every gate touches only wires named by `roles`, with distinct operands.
pub fn assert_wires_within(seq: &GateSequence, roles: &WireRoles) {
    for op in seq {
        let wires = op.wires();
        assert!(op.check_distinct().is_ok(), "{op:?} repeats a wire");
        for w in wires {
            assert!(roles.contains(w), "{op:?} touches foreign wire {w}");
        }
    }
}

/// A dense statevector over `num_qubits` wires.
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// The basis state `|index⟩`.
    pub fn basis(num_qubits: usize, index: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Put `wire` into `a|0⟩ + b|1⟩`, assuming it currently holds |0⟩.
    pub fn prepare(&mut self, wire: Wire, a: Complex64, b: Complex64) {
        let mask = 1usize << wire.0;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let amp = self.amplitudes[i];
                self.amplitudes[i] = amp * a;
                self.amplitudes[i | mask] = amp * b;
            }
        }
    }

    /// Apply every gate of `seq`.
    pub fn apply(&mut self, seq: &GateSequence) {
        for op in seq {
            match *op {
                GateOp::Not(q) => self.apply_controlled(&[], q),
                GateOp::Cx(c, t) => self.apply_controlled(&[c], t),
                GateOp::Toffoli(a, b, t) => self.apply_controlled(&[a, b], t),
            }
        }
    }

    fn apply_controlled(&mut self, controls: &[Wire], target: Wire) {
        let ctrl_mask = controls.iter().fold(0usize, |m, w| m | (1 << w.0));
        let tgt_mask = 1usize << target.0;
        for i in 0..(1usize << self.num_qubits) {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    /// Largest amplitude difference to `other`.
    pub fn distance(&self, other: &Statevector) -> f64 {
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }
}
