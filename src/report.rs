//! Text rendering of analysis results
//!
//! Pure presentation: everything here reads finished [`ChipAnalysis`] and
//! [`Comparison`] values and never recomputes a physical quantity.

use std::fmt;

use crate::comparison::{Comparison, KEY_INSIGHTS};
use crate::power::ChipAnalysis;
use crate::thermal::{ThermalAssessment, ThermalStatus};

const RULE_WIDTH: usize = 70;

fn heavy_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn light_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

impl fmt::Display for ThermalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThermalStatus::WithinSpec => write!(f, "✓ OK"),
            ThermalStatus::OverTemperature => write!(f, "✗ OVERTEMP"),
        }
    }
}

impl fmt::Display for ThermalAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}:", self.cooling.name)?;
        writeln!(f, "    θ = {}°C/W", self.cooling.theta_c_per_w)?;
        writeln!(f, "    Chip temp: {:.1}°C", self.chip_temperature_c)?;
        writeln!(f, "    Margin: {:.1}°C {}", self.margin_c, self.status)
    }
}

impl fmt::Display for ChipAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        heavy_rule(f)?;
        writeln!(f, "POWER ANALYSIS: {}", self.chip.name)?;
        heavy_rule(f)?;

        writeln!(f)?;
        writeln!(f, "Specifications:")?;
        writeln!(f, "  Process: {}nm", self.chip.process_node_nm)?;
        writeln!(f, "  MAC Units: {}", self.unit.mac_units)?;
        writeln!(f, "  Frequency: {:?} GHz", self.chip.frequency_ghz)?;
        writeln!(f, "  Voltage: {:?} V", self.unit.voltage)?;

        writeln!(f)?;
        writeln!(f, "Power Analysis:")?;
        writeln!(f, "  Power per MAC unit: {:.2} mW", self.power.per_unit_watts * 1000.0)?;
        writeln!(f, "  Total dynamic power: {:.2} W", self.power.dynamic_watts)?;
        writeln!(f, "  Static power (leakage): {:.2} W", self.power.static_watts)?;
        writeln!(f, "  Total chip power: {:.2} W", self.power.total_watts)?;

        writeln!(f)?;
        writeln!(f, "Thermal Analysis:")?;
        for assessment in &self.thermal {
            write!(f, "{}", assessment)?;
        }

        writeln!(f)?;
        writeln!(f, "Performance:")?;
        writeln!(f, "  MACs/second: {:.1} GMAC/s", self.performance.gmacs_per_second())?;
        writeln!(f, "  Operations/second: {:.1} GFLOPS (approx)", self.performance.approx_gflops())?;
        writeln!(f, "  Power efficiency: {:.2} GOPS/W", self.performance.efficiency_gops_per_watt)
    }
}

/// Summary table and insights, without the per-chip blocks
pub struct SummaryTable<'a>(pub &'a Comparison);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        heavy_rule(f)?;
        writeln!(f, "SUMMARY COMPARISON")?;
        heavy_rule(f)?;
        writeln!(f, "{:<25} {:<12} {:<12} {:<12}", "Architecture", "Power (W)", "GOPS", "GOPS/W")?;
        light_rule(f)?;

        for entry in &self.0.entries {
            writeln!(
                f,
                "{:<25} {:<12.1} {:<12.1} {:<12.2}",
                entry.name,
                entry.power_watts,
                entry.gops(),
                entry.efficiency_gops_per_watt,
            )?;
        }

        writeln!(f)?;
        heavy_rule(f)?;
        writeln!(f, "KEY INSIGHTS:")?;
        light_rule(f)?;
        for (i, insight) in KEY_INSIGHTS.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, insight)?;
        }
        Ok(())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for analysis in &self.analyses {
            write!(f, "{}", analysis)?;
        }
        write!(f, "{}", SummaryTable(self))
    }
}
