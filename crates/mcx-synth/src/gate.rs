//! Named gate definitions.
//!
//! Thin adapters that give each construction a gate name, a fixed register
//! layout (controls, target, work) and a definition over local wires
//! `0..num_qubits`, so a host can splice it anywhere with
//! [`McxGate::append_to`].

use mcx_ir::{GateSequence, Wire, WireRoles};
use serde::{Deserialize, Serialize};

use crate::config::SynthesisConfig;
use crate::error::{SynthError, SynthResult};
use crate::linear::mcx_linear;
use crate::log::mcx_log;
use crate::parallel::parallel_ccx_block;

/// Which construction to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McxStrategy {
    /// O(k) depth, one work wire.
    LinearDepth,
    /// O(log k) depth, two work wires.
    LogDepth,
}

impl McxStrategy {
    /// Work wires the construction needs for three or more controls.
    pub fn num_work_wires(self) -> usize {
        match self {
            McxStrategy::LinearDepth => 1,
            McxStrategy::LogDepth => 2,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            McxStrategy::LinearDepth => "linear_mcx",
            McxStrategy::LogDepth => "log_mcx",
        }
    }
}

/// A multi-controlled-X gate synthesised with conditionally clean ancillae.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McxGate {
    /// Construction to use.
    pub strategy: McxStrategy,
    /// Control count and work-wire state.
    pub config: SynthesisConfig,
}

impl McxGate {
    /// Create a gate, rejecting configs with no controls.
    pub fn new(strategy: McxStrategy, config: SynthesisConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self { strategy, config })
    }

    /// Linear-depth gate with clean work wires.
    pub fn linear(num_controls: usize) -> SynthResult<Self> {
        Self::new(McxStrategy::LinearDepth, SynthesisConfig::new(num_controls))
    }

    /// Log-depth gate with clean work wires.
    pub fn log(num_controls: usize) -> SynthResult<Self> {
        Self::new(McxStrategy::LogDepth, SynthesisConfig::new(num_controls))
    }

    /// Gate name, e.g. `log_mcx_8_2`.
    pub fn name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.strategy.prefix(),
            self.config.num_controls,
            self.strategy.num_work_wires()
        )
    }

    /// Work wires in the register layout; none below three controls.
    pub fn num_work_wires(&self) -> usize {
        if self.config.num_controls <= 2 {
            0
        } else {
            self.strategy.num_work_wires()
        }
    }

    /// Total width: controls, target, work.
    pub fn num_qubits(&self) -> usize {
        self.config.num_controls + 1 + self.num_work_wires()
    }

    /// The local register layout the definition is written against.
    pub fn roles(&self) -> SynthResult<WireRoles> {
        let k = to_u32(self.config.num_controls)?;
        let work = to_u32(self.num_work_wires())?;
        Ok(WireRoles::contiguous(k, work))
    }

    /// The gate's decomposition over local wires `0..num_qubits()`.
    ///
    /// One control is a CNOT and two controls a single Toffoli; larger
    /// gates use the selected construction.
    pub fn definition(&self) -> SynthResult<GateSequence> {
        self.config.validate()?;
        let roles = self.roles()?;
        let body = match roles.controls.as_slice() {
            [c] => {
                let mut seq = GateSequence::new();
                seq.cx(*c, roles.target)?;
                seq
            }
            [c0, c1] => {
                let mut seq = GateSequence::new();
                seq.toffoli(*c0, *c1, roles.target)?;
                seq
            }
            _ => match self.strategy {
                McxStrategy::LinearDepth => mcx_linear(&roles, self.config.ancilla)?,
                McxStrategy::LogDepth => mcx_log(&roles, self.config.ancilla)?,
            },
        };

        let mut definition = GateSequence::named(self.name());
        definition.append(&body);
        Ok(definition)
    }

    /// Append the definition to `seq` with local wire `i` placed on
    /// `wires[i]`.
    pub fn append_to(&self, seq: &mut GateSequence, wires: &[Wire]) -> SynthResult<()> {
        if wires.len() != self.num_qubits() {
            return Err(SynthError::InvalidInput(format!(
                "{} acts on {} wires, got {}",
                self.name(),
                self.num_qubits(),
                wires.len()
            )));
        }
        seq.compose(&self.definition()?, wires)?;
        Ok(())
    }
}

/// `n` independent conditionally-clean Toffolis over registers
/// `x = 0..n`, `y = n..2n`, `t = 2n..3n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelCcxGate {
    /// Number of Toffolis.
    pub n: usize,
}

impl ParallelCcxGate {
    /// Create a block of `n` Toffolis.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Gate name, e.g. `ccxn_3`.
    pub fn name(&self) -> String {
        format!("ccxn_{}", self.n)
    }

    /// Total width.
    pub fn num_qubits(&self) -> usize {
        3 * self.n
    }

    /// The block over local wires.
    pub fn definition(&self) -> SynthResult<GateSequence> {
        let n = to_u32(self.n)?;
        let block = parallel_ccx_block(
            &Wire::range(0, n),
            &Wire::range(n, n),
            &Wire::range(2 * n, n),
        )?;
        let mut definition = GateSequence::named(self.name());
        definition.append(&block);
        Ok(definition)
    }
}

fn to_u32(count: usize) -> SynthResult<u32> {
    u32::try_from(count)
        .map_err(|_| SynthError::InvalidInput(format!("{count} wires exceeds u32::MAX")))
}
