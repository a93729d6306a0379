//! Rule, lattice, and driver settings.
//!
//! All settings are plain data with serde defaults, so a partial JSON
//! document only needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Survival/birth rule plus randomization ratio.
///
/// Mutable between steps; a change takes effect on the next `step()`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// A live cell with this many neighbors or fewer dies.
    pub lonely: u8,
    /// A live cell with this many neighbors or more dies.
    pub crowded: u8,
    /// A dead cell with exactly this many neighbors is born.
    pub birth: u8,
    /// Toroidal neighbor lookup instead of bounded.
    pub wrap: bool,
    /// Probability that a cell is alive after `randomize`.
    pub random_ratio: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            lonely: 16,
            crowded: 23,
            birth: 4,
            wrap: false,
            random_ratio: 0.02,
        }
    }
}

/// State every cell takes when a grid is allocated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialFill {
    #[default]
    Alive,
    Dead,
}

impl InitialFill {
    #[inline]
    pub fn cell_value(self) -> u8 {
        match self {
            InitialFill::Alive => 1,
            InitialFill::Dead => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub size: i16,
    pub initial_fill: InitialFill,
    /// Seed used to randomize right after construction, if any.
    pub initial_seed: Option<String>,
    /// Worker threads for stepping. 0 and 1 both mean serial.
    pub threads: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            size: 32,
            initial_fill: InitialFill::Alive,
            initial_seed: Some("mpltsjkm".to_string()),
            threads: 1,
        }
    }
}

/// Cadence settings owned by the driver, never read by the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub enabled: bool,
    pub step_delay_ms: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            enabled: true,
            step_delay_ms: 60.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lattice: LatticeConfig,
    pub rule: RuleConfig,
    pub driver: DriverConfig,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}
