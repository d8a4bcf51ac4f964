//! Steady-state thermal estimate
//!
//! Junction temperature is modeled as `ambient + P·θ` for a single lumped
//! thermal resistance. No transient behaviour, no throttling.

use serde::{Deserialize, Serialize};

use crate::config::CoolingOption;

/// Whether a cooling solution keeps the chip below its temperature limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalStatus {
    WithinSpec,
    OverTemperature,
}

impl ThermalStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ThermalStatus::WithinSpec)
    }
}

/// Result of running a chip at a given power under one cooling option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalAssessment {
    pub cooling: CoolingOption,
    pub chip_temperature_c: f64,
    /// Headroom to the limit; negative when over temperature
    pub margin_c: f64,
    pub status: ThermalStatus,
}

impl CoolingOption {
    /// Temperature rise above ambient at `power_watts`
    pub fn temperature_rise(&self, power_watts: f64) -> f64 {
        power_watts * self.theta_c_per_w
    }

    pub fn chip_temperature(&self, power_watts: f64) -> f64 {
        self.ambient_c + self.temperature_rise(power_watts)
    }

    /// Classify the chip temperature at `power_watts`. The limit itself
    /// counts as over temperature.
    pub fn assess(&self, power_watts: f64) -> ThermalAssessment {
        let chip_temperature_c = self.chip_temperature(power_watts);
        let status = if chip_temperature_c < self.max_temp_c {
            ThermalStatus::WithinSpec
        } else {
            ThermalStatus::OverTemperature
        };

        ThermalAssessment {
            cooling: self.clone(),
            chip_temperature_c,
            margin_c: self.max_temp_c - chip_temperature_c,
            status,
        }
    }
}

/// Assess `power_watts` against every cooling option, preserving order
pub fn assess_all(cooling: &[CoolingOption], power_watts: f64) -> Vec<ThermalAssessment> {
    cooling.iter().map(|option| option.assess(power_watts)).collect()
}
