//! Analysis Configuration Module
//!
//! Defines every parameter the power pipeline reads: chip identity, the
//! compute unit specification, model coefficients and the cooling table.
//! `Default` impls carry the reference scenario.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PowerError, Result};

/// Identity and physical parameters of one modeled accelerator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipConfig {
    /// Display label
    pub name: String,
    /// Process size in nanometers (display only)
    pub process_node_nm: f64,
    /// Clock frequency in GHz
    pub frequency_ghz: f64,
}

impl ChipConfig {
    pub fn new(name: impl Into<String>, process_node_nm: f64, frequency_ghz: f64) -> Self {
        ChipConfig {
            name: name.into(),
            process_node_nm,
            frequency_ghz,
        }
    }

    /// Reject non-positive process node or frequency
    pub fn validate(&self) -> Result<()> {
        ensure_positive(&self.name, "process_node_nm", self.process_node_nm)?;
        ensure_positive(&self.name, "frequency_ghz", self.frequency_ghz)
    }

    /// The three reference accelerators, in report order
    pub fn reference_set() -> Vec<ChipConfig> {
        vec![
            ChipConfig::new("Mobile AI Accelerator", 5.0, 1.0),
            ChipConfig::new("Desktop GPU", 7.0, 2.0),
            ChipConfig::new("Data Center TPU", 7.0, 1.5),
        ]
    }
}

/// Compute unit specification shared by every chip in an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// Number of multiply-accumulate units
    pub mac_units: u32,
    /// Supply voltage in volts
    pub voltage: f64,
    /// Switched capacitance per MAC unit in picofarads
    pub capacitance_per_mac_pf: f64,
}

impl Default for UnitSpec {
    fn default() -> Self {
        UnitSpec {
            mac_units: 128,
            voltage: 1.0,
            capacitance_per_mac_pf: 10.0,
        }
    }
}

/// First-order model coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Fraction of circuits switching per cycle (α)
    pub activity_factor: f64,
    /// Static (leakage) power as a fraction of dynamic power
    pub leakage_ratio: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters {
            activity_factor: 0.5,
            leakage_ratio: 0.3,
        }
    }
}

/// A cooling solution characterised by its thermal resistance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingOption {
    pub name: String,
    /// Thermal resistance θ in °C/W
    pub theta_c_per_w: f64,
    /// Ambient temperature in °C
    pub ambient_c: f64,
    /// Maximum safe junction temperature in °C
    pub max_temp_c: f64,
}

impl CoolingOption {
    pub fn new(name: impl Into<String>, theta_c_per_w: f64, ambient_c: f64, max_temp_c: f64) -> Self {
        CoolingOption {
            name: name.into(),
            theta_c_per_w,
            ambient_c,
            max_temp_c,
        }
    }

    pub fn passive_heatsink() -> Self {
        Self::new("Passive heatsink", 10.0, 25.0, 100.0)
    }

    pub fn active_fan() -> Self {
        Self::new("Active cooling (fan)", 5.0, 25.0, 100.0)
    }

    pub fn liquid() -> Self {
        Self::new("Liquid cooling", 1.0, 25.0, 100.0)
    }

    /// Passive, active and liquid cooling, in report order
    pub fn reference_set() -> Vec<CoolingOption> {
        vec![Self::passive_heatsink(), Self::active_fan(), Self::liquid()]
    }
}

/// Everything the pipeline needs besides the chip itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub unit: UnitSpec,
    pub model: ModelParameters,
    pub cooling: Vec<CoolingOption>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            unit: UnitSpec::default(),
            model: ModelParameters::default(),
            cooling: CoolingOption::reference_set(),
        }
    }
}

impl AnalysisConfig {
    /// Reject inputs that leave the chip with no power to divide by: an
    /// empty unit array, non-positive voltage, capacitance or activity
    /// factor, or a negative leakage ratio
    pub fn validate(&self) -> Result<()> {
        ensure_positive("analysis", "mac_units", f64::from(self.unit.mac_units))?;
        ensure_positive("analysis", "voltage", self.unit.voltage)?;
        ensure_positive("analysis", "capacitance_per_mac_pf", self.unit.capacitance_per_mac_pf)?;
        ensure_positive("analysis", "activity_factor", self.model.activity_factor)?;
        if self.model.leakage_ratio.is_nan() || self.model.leakage_ratio < 0.0 {
            return Err(PowerError::negative("analysis", "leakage_ratio", self.model.leakage_ratio));
        }
        Ok(())
    }
}

/// An analysis configuration plus the ordered list of chips to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub analysis: AnalysisConfig,
    pub chips: Vec<ChipConfig>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            analysis: AnalysisConfig::default(),
            chips: ChipConfig::reference_set(),
        }
    }
}

impl Scenario {
    /// Validate the analysis parameters and every chip
    pub fn validate(&self) -> Result<()> {
        validate_inputs(&self.analysis, &self.chips)
    }

    /// Save scenario to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str).map_err(|e| PowerError::io(path, e))
    }

    /// Load scenario from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path).map_err(|e| PowerError::io(path, e))?;
        Ok(toml::from_str(&toml_str)?)
    }
}

/// Checks shared by [`Scenario::validate`] and `Comparator::try_run`
pub(crate) fn validate_inputs(analysis: &AnalysisConfig, chips: &[ChipConfig]) -> Result<()> {
    if chips.is_empty() {
        return Err(PowerError::EmptyScenario);
    }
    analysis.validate()?;
    chips.iter().try_for_each(ChipConfig::validate)
}

fn ensure_positive(owner: &str, parameter: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(PowerError::non_positive(owner, parameter, value));
    }
    Ok(())
}
