//! Synthesis configuration.
//!
//! A [`SynthesisConfig`] can be built in code, parsed from YAML or JSON, and
//! then overridden from the environment:
//!
//! - `MCX_NUM_CONTROLS`: number of control wires
//! - `MCX_ANCILLA`: `clean` or `dirty`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SynthError, SynthResult};

/// Initial state assumed for the work wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AncillaState {
    /// Work wires start in |0⟩.
    #[default]
    Clean,
    /// Work wires start in an arbitrary unknown state and must be returned
    /// to it.
    Dirty,
}

impl AncillaState {
    /// Whether toggle-detection gates are required.
    pub fn is_dirty(self) -> bool {
        self == AncillaState::Dirty
    }
}

impl fmt::Display for AncillaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AncillaState::Clean => write!(f, "clean"),
            AncillaState::Dirty => write!(f, "dirty"),
        }
    }
}

impl FromStr for AncillaState {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(AncillaState::Clean),
            "dirty" => Ok(AncillaState::Dirty),
            other => Err(SynthError::Config(format!(
                "unknown ancilla state '{other}' (expected 'clean' or 'dirty')"
            ))),
        }
    }
}

/// Parameters of one MCX gate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Number of control wires (at least 1).
    pub num_controls: usize,

    /// Assumed initial state of the work wires.
    #[serde(default)]
    pub ancilla: AncillaState,
}

impl SynthesisConfig {
    /// Config for `num_controls` controls with clean work wires.
    pub fn new(num_controls: usize) -> Self {
        Self {
            num_controls,
            ancilla: AncillaState::Clean,
        }
    }

    /// Override the assumed work-wire state.
    #[must_use]
    pub fn with_ancilla(mut self, ancilla: AncillaState) -> Self {
        self.ancilla = ancilla;
        self
    }

    /// Parse a config from YAML.
    pub fn from_yaml_str(contents: &str) -> SynthResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(contents).map_err(|e| SynthError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON.
    pub fn from_json_str(contents: &str) -> SynthResult<Self> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| SynthError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MCX_NUM_CONTROLS` and `MCX_ANCILLA` from the process
    /// environment.
    pub fn apply_env(self) -> SynthResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> SynthResult<Self> {
        if let Some(raw) = lookup("MCX_NUM_CONTROLS") {
            self.num_controls = raw.trim().parse().map_err(|_| {
                SynthError::Config(format!("MCX_NUM_CONTROLS is not a count: '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup("MCX_ANCILLA") {
            self.ancilla = raw.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the config describes a gate that exists.
    pub fn validate(&self) -> SynthResult<()> {
        if self.num_controls == 0 {
            return Err(SynthError::Config(
                "num_controls must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
