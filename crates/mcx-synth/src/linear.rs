//! Linear-depth MCX with one work wire.
//!
//! The construction seeds a conditionally clean work wire with the AND of the
//! first two controls, then runs a ladder of Toffoli+X pairs over the
//! remaining controls:
//!
//!   CCX(c0, c1, w) · L · CCX(w, c_f, t) · L† · CCX(c0, c1, w)
//!
//! Each ladder step `CCX(a, b, q) · X(q)` turns a control `q` that is known to
//! be 1 (whenever the result matters) into `a ∧ b`, so after the ladder the
//! single control `c_f` holds the AND of everything the seed did not cover.
//!
//! Toffoli count: 2k − 3 with a clean work wire. A dirty work wire needs the
//! ladder, terminal Toffoli and inverse ladder a second time (toggle
//! detection), giving 4k − 8.

use mcx_ir::{GateSequence, Wire, WireRoles};
use tracing::debug;

use crate::config::AncillaState;
use crate::error::{SynthError, SynthResult};

/// Output of [`linear_ladder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearLadder {
    /// Up- and down-ladder gates.
    pub ops: GateSequence,
    /// Index into the ladder's input wires of the control left holding the
    /// AND of the chain.
    pub final_control: usize,
}

impl LinearLadder {
    /// The uncomputing ladder.
    pub fn inverse(&self) -> GateSequence {
        self.ops.inverse()
    }
}

/// Build the linear-depth ladder over `wires`.
///
/// With `n = wires.len()`:
/// - up-ladder, `i = 1, 3, …, ≤ n − 3`: `CCX(w[i+1], w[i+2], w[i])`, `X(w[i])`
/// - down-ladder from `(x, y, t) = (n−3, n−5, n−6)` for even `n` or
///   `(n−1, n−4, n−5)` for odd `n`, skipped when `t < 0`:
///   `CCX(w[x], w[y], w[t])`, `X(w[t])`, then for `i = t, t−2, …, ≥ 2`:
///   `CCX(w[i], w[i−1], w[i−2])`, `X(w[i−2])`
/// - final control index `max(0, 5 − n)`
pub fn linear_ladder(wires: &[Wire]) -> SynthResult<LinearLadder> {
    let n = wires.len();
    if n <= 2 {
        return Err(SynthError::InvalidInput(format!(
            "linear ladder needs at least 3 controls, got {n}; use a Toffoli directly"
        )));
    }

    let mut ops = GateSequence::named(format!("linear_ladder_{n}"));

    // up-ladder
    for i in (1..n - 2).step_by(2) {
        ops.toffoli(wires[i + 1], wires[i + 2], wires[i])?
            .x(wires[i])?;
    }

    // down-ladder
    let down = if n % 2 == 0 {
        n.checked_sub(6).map(|t| (t + 3, t + 1, t))
    } else {
        n.checked_sub(5).map(|t| (t + 4, t + 1, t))
    };
    if let Some((x, y, t)) = down {
        ops.toffoli(wires[x], wires[y], wires[t])?.x(wires[t])?;
        for i in (2..=t).rev().step_by(2) {
            ops.toffoli(wires[i], wires[i - 1], wires[i - 2])?
                .x(wires[i - 2])?;
        }
    }

    Ok(LinearLadder {
        ops,
        final_control: 5usize.saturating_sub(n),
    })
}

/// Synthesize an MCX over `roles.controls` onto `roles.target` using
/// `roles.work[0]` as the only work wire.
///
/// Requires at least 3 controls; smaller gates are a single Toffoli or CNOT
/// and are left to the caller.
pub fn mcx_linear(roles: &WireRoles, ancilla: AncillaState) -> SynthResult<GateSequence> {
    roles
        .validate()
        .map_err(|e| SynthError::InvalidInput(e.to_string()))?;
    let controls = &roles.controls;
    let k = controls.len();
    if k < 3 {
        return Err(SynthError::InvalidInput(format!(
            "linear-depth MCX needs at least 3 controls, got {k}"
        )));
    }
    let Some(&work) = roles.work.first() else {
        return Err(SynthError::InvalidInput(
            "linear-depth MCX needs 1 work wire, got 0".into(),
        ));
    };
    let target = roles.target;

    let ladder = linear_ladder(controls)?;
    let ladder_dg = ladder.inverse();
    let final_control = controls[ladder.final_control];

    let mut seq = GateSequence::named(format!("linear_mcx_{k}"));
    // conditionally clean work wire
    seq.toffoli(controls[0], controls[1], work)?;
    seq.append(&ladder.ops);
    seq.toffoli(work, final_control, target)?;
    seq.append(&ladder_dg);
    seq.toffoli(controls[0], controls[1], work)?;

    if ancilla.is_dirty() {
        // toggle detection: cancels the work wire's unknown initial value
        seq.append(&ladder.ops);
        seq.toffoli(work, final_control, target)?;
        seq.append(&ladder_dg);
    }

    debug!(
        num_controls = k,
        %ancilla,
        toffolis = seq.toffoli_count(),
        depth = seq.depth(),
        "synthesised linear-depth MCX"
    );

    Ok(seq)
}
