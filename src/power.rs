//! Power Model
//!
//! The analytical pipeline for one chip configuration:
//!
//! 1. dynamic power per MAC unit, `α·C·V²·f`
//! 2. total dynamic power across all units
//! 3. static (leakage) power as a fixed fraction of dynamic power
//! 4. chip temperature under each cooling option
//! 5. throughput and GOPS/W efficiency
//!
//! Inputs are not validated here. Degenerate values (zero or negative
//! frequency, voltage or capacitance) flow through IEEE-754 arithmetic as-is;
//! zero total power gives an infinite efficiency, or NaN when throughput is
//! also zero. Use [`ChipConfig::validate`] and [`AnalysisConfig::validate`]
//! to reject such inputs up front.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ChipConfig, UnitSpec};
use crate::thermal::{self, ThermalAssessment};

const PICO: f64 = 1e-12;
const GIGA: f64 = 1e9;

/// Power budget of one chip in watts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerBreakdown {
    pub per_unit_watts: f64,
    pub dynamic_watts: f64,
    pub static_watts: f64,
    pub total_watts: f64,
}

/// Throughput and energy efficiency of one chip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// One MAC per unit per cycle
    pub ops_per_unit_per_second: f64,
    pub total_ops_per_second: f64,
    /// Giga-operations per second per watt of total chip power
    pub efficiency_gops_per_watt: f64,
}

impl Performance {
    pub fn gmacs_per_second(&self) -> f64 {
        self.total_ops_per_second / GIGA
    }

    /// Treats one MAC as one floating-point operation
    pub fn approx_gflops(&self) -> f64 {
        self.total_ops_per_second / GIGA
    }
}

/// Every quantity produced by one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipAnalysis {
    pub chip: ChipConfig,
    pub unit: UnitSpec,
    pub power: PowerBreakdown,
    pub thermal: Vec<ThermalAssessment>,
    pub performance: Performance,
}

impl ChipAnalysis {
    /// `(total_chip_power_watts, total_ops_per_second)`
    pub fn result(&self) -> (f64, f64) {
        (self.power.total_watts, self.performance.total_ops_per_second)
    }

    /// True when every cooling option keeps the chip within its limit
    pub fn all_cooling_within_spec(&self) -> bool {
        self.thermal.iter().all(|t| t.status.is_ok())
    }
}

/// Power, thermal and performance model for one chip configuration
#[derive(Debug, Clone)]
pub struct PowerModel {
    pub chip: ChipConfig,
    pub analysis: AnalysisConfig,
}

impl PowerModel {
    /// Model a chip with the reference unit spec, coefficients and cooling table
    pub fn new(name: impl Into<String>, process_node_nm: f64, frequency_ghz: f64) -> Self {
        Self::with_analysis(
            ChipConfig::new(name, process_node_nm, frequency_ghz),
            AnalysisConfig::default(),
        )
    }

    pub fn with_analysis(chip: ChipConfig, analysis: AnalysisConfig) -> Self {
        PowerModel { chip, analysis }
    }

    pub fn frequency_hz(&self) -> f64 {
        self.chip.frequency_ghz * GIGA
    }

    /// Dynamic power in watts of `num_units` units switching at the chip clock
    pub fn compute_dynamic_power(&self, num_units: u32, capacitance_pf: f64, voltage: f64) -> f64 {
        let alpha = self.analysis.model.activity_factor;
        let capacitance_f = capacitance_pf * PICO;

        let per_unit = alpha * capacitance_f * voltage.powi(2) * self.frequency_hz();
        per_unit * f64::from(num_units)
    }

    /// Run the pipeline and keep every intermediate value
    pub fn analyze(&self) -> ChipAnalysis {
        let unit = &self.analysis.unit;

        let per_unit_watts =
            self.compute_dynamic_power(1, unit.capacitance_per_mac_pf, unit.voltage);
        let dynamic_watts = per_unit_watts * f64::from(unit.mac_units);
        let static_watts = dynamic_watts * self.analysis.model.leakage_ratio;
        let total_watts = dynamic_watts + static_watts;

        let thermal = thermal::assess_all(&self.analysis.cooling, total_watts);
        for assessment in thermal.iter().filter(|a| !a.status.is_ok()) {
            debug!(
                "{}: {} over temperature at {:.1}°C",
                self.chip.name, assessment.cooling.name, assessment.chip_temperature_c
            );
        }

        let ops_per_unit_per_second = self.frequency_hz();
        let total_ops_per_second = ops_per_unit_per_second * f64::from(unit.mac_units);
        let efficiency_gops_per_watt = total_ops_per_second / (total_watts * GIGA);

        debug!(
            "{}: {:.3} W total, {:.1} GOPS, {:.2} GOPS/W",
            self.chip.name,
            total_watts,
            total_ops_per_second / GIGA,
            efficiency_gops_per_watt
        );

        ChipAnalysis {
            chip: self.chip.clone(),
            unit: unit.clone(),
            power: PowerBreakdown {
                per_unit_watts,
                dynamic_watts,
                static_watts,
                total_watts,
            },
            thermal,
            performance: Performance {
                ops_per_unit_per_second,
                total_ops_per_second,
                efficiency_gops_per_watt,
            },
        }
    }

    /// `(total_chip_power_watts, total_ops_per_second)`
    pub fn run_full_analysis(&self) -> (f64, f64) {
        self.analyze().result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::ThermalStatus;
    use approx::assert_relative_eq;

    fn mobile() -> PowerModel {
        PowerModel::new("Mobile AI Accelerator", 5.0, 1.0)
    }

    #[test]
    fn test_unit_formula() {
        // 1 Hz clock, 1 F, 1 V, α = 0.5
        let model = PowerModel::new("unit", 1.0, 1e-9);
        assert_relative_eq!(model.compute_dynamic_power(1, 1e12, 1.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dynamic_power_scaling() {
        let model = mobile();
        let base = model.compute_dynamic_power(1, 10.0, 1.0);

        assert_relative_eq!(model.compute_dynamic_power(4, 10.0, 1.0), 4.0 * base, max_relative = 1e-12);
        assert_relative_eq!(model.compute_dynamic_power(1, 30.0, 1.0), 3.0 * base, max_relative = 1e-12);
        assert_relative_eq!(model.compute_dynamic_power(1, 10.0, 2.0), 4.0 * base, max_relative = 1e-12);
        assert_relative_eq!(model.compute_dynamic_power(1, 10.0, 0.5), 0.25 * base, max_relative = 1e-12);
        assert_eq!(model.compute_dynamic_power(0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn test_mobile_reference_scenario() {
        let analysis = mobile().analyze();

        assert_relative_eq!(analysis.power.per_unit_watts, 5e-3, epsilon = 1e-12);
        assert_relative_eq!(analysis.power.dynamic_watts, 0.64, epsilon = 1e-12);
        assert_relative_eq!(analysis.power.static_watts, 0.192, epsilon = 1e-12);
        assert_relative_eq!(analysis.power.total_watts, 0.832, epsilon = 1e-12);

        let passive = &analysis.thermal[0];
        assert_eq!(passive.cooling.name, "Passive heatsink");
        assert_relative_eq!(passive.chip_temperature_c, 33.32, epsilon = 1e-9);
        assert_relative_eq!(passive.margin_c, 66.68, epsilon = 1e-9);
        assert_eq!(passive.status, ThermalStatus::WithinSpec);

        assert_relative_eq!(analysis.performance.ops_per_unit_per_second, 1e9);
        assert_relative_eq!(analysis.performance.total_ops_per_second, 1.28e11);
        assert_relative_eq!(analysis.performance.gmacs_per_second(), 128.0);
        assert_relative_eq!(
            analysis.performance.efficiency_gops_per_watt,
            153.846,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_run_full_analysis_tuple() {
        let (power, ops) = mobile().run_full_analysis();
        assert_relative_eq!(power, 0.832, epsilon = 1e-12);
        assert_relative_eq!(ops, 1.28e11);
    }

    #[test]
    fn test_static_power_ratio() {
        for chip in ChipConfig::reference_set() {
            let analysis = PowerModel::with_analysis(chip, AnalysisConfig::default()).analyze();
            assert_relative_eq!(analysis.power.static_watts, 0.3 * analysis.power.dynamic_watts);
            assert_relative_eq!(
                analysis.power.total_watts,
                analysis.power.dynamic_watts + analysis.power.static_watts
            );
        }
    }

    #[test]
    fn test_process_node_does_not_affect_results() {
        let a = PowerModel::new("a", 5.0, 1.5).run_full_analysis();
        let b = PowerModel::new("b", 28.0, 1.5).run_full_analysis();
        assert_eq!(a, b);
    }

    #[test]
    fn test_thermal_ordering_in_pipeline() {
        let analysis = PowerModel::new("Desktop GPU", 7.0, 2.0).analyze();
        let temps: Vec<_> = analysis.thermal.iter().map(|t| t.chip_temperature_c).collect();
        assert!(temps[2] < temps[1] && temps[1] < temps[0]);
        assert!(analysis.all_cooling_within_spec());
    }

    #[test]
    fn test_hot_chip_is_flagged() {
        let mut config = AnalysisConfig::default();
        config.unit.mac_units = 6_400;
        let analysis =
            PowerModel::with_analysis(ChipConfig::new("Wafer", 7.0, 1.0), config).analyze();

        // 41.6 W: passive and fan overheat, liquid survives
        assert_relative_eq!(analysis.power.total_watts, 41.6, epsilon = 1e-9);
        let statuses: Vec<_> = analysis.thermal.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            [
                ThermalStatus::OverTemperature,
                ThermalStatus::OverTemperature,
                ThermalStatus::WithinSpec,
            ]
        );
        assert!(!analysis.all_cooling_within_spec());
    }

    #[test]
    fn test_degenerate_inputs_pass_through() {
        let negative = PowerModel::new("negative", 7.0, -1.0).analyze();
        assert!(negative.power.total_watts < 0.0);

        let stopped = PowerModel::new("stopped", 7.0, 0.0).analyze();
        assert_eq!(stopped.power.total_watts, 0.0);
        assert!(stopped.performance.efficiency_gops_per_watt.is_nan());

        let mut config = AnalysisConfig::default();
        config.unit.voltage = 0.0;
        let unpowered =
            PowerModel::with_analysis(ChipConfig::new("unpowered", 7.0, 1.0), config).analyze();
        assert!(unpowered.performance.efficiency_gops_per_watt.is_infinite());
    }
}
