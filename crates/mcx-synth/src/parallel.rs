//! Batched creation of conditionally clean ancillae.

use mcx_ir::{GateSequence, Wire};

use crate::error::{SynthError, SynthResult};

/// For each `i` ascending, emit `X(t[i])` then `CCX(x[i], y[i], t[i])`.
///
/// Each `t[i]` must be known to hold 1 whenever the result matters; the pair
/// leaves it holding `x[i] ∧ y[i]`. When the triples are disjoint the block
/// has depth 2 regardless of its width.
pub fn parallel_ccx_block(x: &[Wire], y: &[Wire], t: &[Wire]) -> SynthResult<GateSequence> {
    if x.len() != y.len() || x.len() != t.len() {
        return Err(SynthError::InvalidInput(format!(
            "parallel CCX block needs equal-length wire lists, got x={}, y={}, t={}",
            x.len(),
            y.len(),
            t.len()
        )));
    }

    let mut ops = GateSequence::named(format!("ccxn_{}", x.len()));
    for ((&xi, &yi), &ti) in x.iter().zip(y).zip(t) {
        ops.x(ti)?.toffoli(xi, yi, ti)?;
    }
    Ok(ops)
}
