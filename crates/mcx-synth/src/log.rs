//! Logarithmic-depth MCX with two work wires.
//!
//! The log ladder reduces the controls pairwise in rounds. A pool of
//! conditionally clean wires starts as the first work wire alone; each round
//! takes up to `|pool| + 1` controls, ANDs them down onto pool wires with
//! parallel Toffolis, and the controls it consumed join the pool for the next
//! round. Both the pool and the batch roughly double per round, so the ladder
//! has O(log k) depth.
//!
//! What remains after the ladder is a handful of "final controls" plus the
//! first work wire, which holds the AND of the first two controls. That
//! smaller MCX is finished by a Toffoli or by [`mcx_linear`] with the second
//! work wire:
//!
//!   L · MCX_linear(w0 + finals → t; w1) · L†
//!
//! Toffoli count: 2k − 3 clean, 4k − 8 dirty.

use mcx_ir::{GateSequence, Wire, WireRoles};
use tracing::{debug, trace};

use crate::config::AncillaState;
use crate::error::{SynthError, SynthResult};
use crate::linear::mcx_linear;
use crate::parallel::parallel_ccx_block;

/// Output of [`log_ladder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLadder {
    /// Ladder gates.
    pub ops: GateSequence,
    /// Controls still to be ANDed with the work wire, sorted, work wire
    /// excluded.
    pub final_controls: Vec<Wire>,
}

impl LogLadder {
    /// The uncomputing ladder.
    pub fn inverse(&self) -> GateSequence {
        self.ops.inverse()
    }
}

/// Builder for the log-depth ladder.
#[derive(Debug, Clone, Copy)]
pub struct LogLadderBuilder {
    work: Wire,
    skip_seed: bool,
}

impl LogLadderBuilder {
    /// Ladder seeded on `work`.
    pub fn new(work: Wire) -> Self {
        Self {
            work,
            skip_seed: false,
        }
    }

    /// Leave out the seed Toffoli onto the work wire.
    ///
    /// The result is the regular ladder minus its first gate.
    #[must_use]
    pub fn skip_seed(mut self, skip: bool) -> Self {
        self.skip_seed = skip;
        self
    }

    /// Build the ladder over `controls`.
    pub fn build(&self, controls: &[Wire]) -> SynthResult<LogLadder> {
        let work = self.work;
        if controls.contains(&work) {
            return Err(SynthError::InvalidInput(format!(
                "work wire {work} is also listed as a control"
            )));
        }

        let mut ops = GateSequence::named(format!("log_ladder_{}", controls.len()));
        let mut pool = vec![work];
        let mut remaining = controls.to_vec();
        let mut final_controls = Vec::new();

        while remaining.len() > 1 {
            let batch_len = (pool.len() + 1).min(remaining.len());
            let mut batch: Vec<Wire> = remaining.drain(..batch_len).collect();
            let mut fresh = Vec::with_capacity(batch.len());
            trace!(batch = batch.len(), pool = pool.len(), "log ladder round");

            while batch.len() > 1 {
                let half = batch.len() / 2;
                let start = batch.len() % 2;
                if pool.len() < half {
                    return Err(SynthError::InternalInvariant(format!(
                        "ancilla pool of {} cannot supply {half} targets",
                        pool.len()
                    )));
                }
                let xs = &batch[start..start + half];
                let ys = &batch[start + half..];
                let ts = &pool[pool.len() - half..];
                if half == 0 || xs.len() != half || ys.len() != half || ts.len() != half {
                    return Err(SynthError::InternalInvariant(format!(
                        "unbalanced split: x={}, y={}, t={}",
                        xs.len(),
                        ys.len(),
                        ts.len()
                    )));
                }

                if ts == [work].as_slice() {
                    // The seed: the work wire is clean, not conditionally clean.
                    if !self.skip_seed {
                        ops.toffoli(xs[0], ys[0], ts[0])?;
                    }
                } else {
                    ops.append(&parallel_ccx_block(xs, ys, ts)?);
                }

                fresh.extend_from_slice(&batch[start..]);
                let mut next = ts.to_vec();
                next.extend_from_slice(&batch[..start]);
                pool.truncate(pool.len() - half);
                batch = next;
            }

            pool.extend(fresh);
            pool.sort_unstable();
            final_controls.extend(batch);
        }

        final_controls.extend(remaining);
        final_controls.sort_unstable();
        final_controls.retain(|&w| w != work);

        Ok(LogLadder {
            ops,
            final_controls,
        })
    }
}

/// Build the log-depth ladder seeded on `work` over `controls`.
pub fn log_ladder(work: Wire, controls: &[Wire]) -> SynthResult<LogLadder> {
    LogLadderBuilder::new(work).build(controls)
}

/// Synthesize an MCX over `roles.controls` onto `roles.target` using
/// `roles.work[0]` and `roles.work[1]`.
///
/// Requires at least 3 controls and 2 work wires.
pub fn mcx_log(roles: &WireRoles, ancilla: AncillaState) -> SynthResult<GateSequence> {
    roles
        .validate()
        .map_err(|e| SynthError::InvalidInput(e.to_string()))?;
    let k = roles.controls.len();
    if roles.work.len() < 2 {
        return Err(SynthError::InvalidInput(format!(
            "log-depth MCX needs 2 work wires, got {}",
            roles.work.len()
        )));
    }
    if k < 3 {
        return Err(SynthError::InvalidInput(format!(
            "log-depth MCX needs at least 3 controls, got {k}"
        )));
    }
    let (w0, w1) = (roles.work[0], roles.work[1]);
    let target = roles.target;

    let ladder = log_ladder(w0, &roles.controls)?;
    let terminal = match ladder.final_controls.as_slice() {
        [] => {
            return Err(SynthError::InternalInvariant(format!(
                "log ladder over {k} controls left no final control"
            )));
        }
        [single] => {
            let mut seq = GateSequence::new();
            seq.toffoli(w0, *single, target)?;
            seq
        }
        finals => {
            let reduced = WireRoles::new(
                std::iter::once(w0).chain(finals.iter().copied()),
                target,
                [w1],
            );
            mcx_linear(&reduced, AncillaState::Clean)?
        }
    };

    let mut seq = GateSequence::named(format!("log_mcx_{k}"));
    seq.append(&ladder.ops);
    seq.append(&terminal);
    seq.append(&ladder.inverse());

    if ancilla.is_dirty() {
        // toggle detection: the seed Toffoli is not repeated
        let toggle = LogLadderBuilder::new(w0)
            .skip_seed(true)
            .build(&roles.controls)?;
        seq.append(&toggle.ops);
        seq.append(&terminal);
        seq.append(&toggle.inverse());
    }

    debug!(
        num_controls = k,
        %ancilla,
        final_controls = ladder.final_controls.len(),
        toffolis = seq.toffoli_count(),
        depth = seq.depth(),
        "synthesised log-depth MCX"
    );

    Ok(seq)
}
