//! Architecture Comparison Module
//!
//! Run the power pipeline over an ordered list of chips and tabulate
//! power, throughput and efficiency side by side. Rows keep input order.

use log::info;

use crate::config::{self, AnalysisConfig, ChipConfig, Scenario};
use crate::error::Result;
use crate::power::{ChipAnalysis, PowerModel};

/// Fixed takeaways printed under the summary table
pub const KEY_INSIGHTS: [&str; 5] = [
    "Mobile chips prioritize efficiency (GOPS/W)",
    "Desktop GPUs balance power and performance",
    "Data center chips maximize throughput",
    "Thermal management is critical for all",
    "Process node affects both power and performance",
];

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub power_watts: f64,
    pub ops_per_second: f64,
    /// `ops_per_second / power_watts`, normalized to GOPS/W
    pub efficiency_gops_per_watt: f64,
}

impl ComparisonEntry {
    fn from_analysis(analysis: &ChipAnalysis) -> Self {
        let (power_watts, ops_per_second) = analysis.result();
        ComparisonEntry {
            name: analysis.chip.name.clone(),
            power_watts,
            ops_per_second,
            efficiency_gops_per_watt: ops_per_second / power_watts / 1e9,
        }
    }

    pub fn gops(&self) -> f64 {
        self.ops_per_second / 1e9
    }
}

/// Full comparison results: per-chip detail plus the summary rows
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Comparison {
    pub analyses: Vec<ChipAnalysis>,
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Most efficient chip; ties go to the earlier row
    pub fn most_efficient(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|best, e| {
            if e.efficiency_gops_per_watt > best.efficiency_gops_per_watt {
                e
            } else {
                best
            }
        })
    }

    /// Names of every chip that overheats under at least one cooling option
    pub fn overheating_chips(&self) -> Vec<&str> {
        self.analyses
            .iter()
            .filter(|a| !a.all_cooling_within_spec())
            .map(|a| a.chip.name.as_str())
            .collect()
    }

    /// Highest throughput chip; ties go to the earlier row
    pub fn highest_throughput(&self) -> Option<&ComparisonEntry> {
        self.entries.iter().reduce(|best, e| {
            if e.ops_per_second > best.ops_per_second {
                e
            } else {
                best
            }
        })
    }
}

/// Runs [`PowerModel`] across a list of chip configurations
#[derive(Debug, Clone)]
pub struct Comparator {
    pub chips: Vec<ChipConfig>,
    pub analysis: AnalysisConfig,
}

impl Comparator {
    pub fn new(chips: Vec<ChipConfig>, analysis: AnalysisConfig) -> Self {
        Comparator { chips, analysis }
    }

    /// Mobile, desktop and datacenter reference accelerators
    pub fn reference() -> Self {
        Self::from_scenario(Scenario::default())
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.chips, scenario.analysis)
    }

    /// Run every chip through the pipeline without validation
    pub fn run(&self) -> Comparison {
        let analyses: Vec<ChipAnalysis> = self
            .chips
            .iter()
            .map(|chip| PowerModel::with_analysis(chip.clone(), self.analysis.clone()).analyze())
            .collect();

        let entries = analyses.iter().map(ComparisonEntry::from_analysis).collect();

        info!("Compared {} chip configurations", analyses.len());
        Comparison { analyses, entries }
    }

    /// Validate the analysis parameters and every chip, then run. The first
    /// invalid chip aborts the whole comparison.
    pub fn try_run(&self) -> Result<Comparison> {
        config::validate_inputs(&self.analysis, &self.chips)?;
        Ok(self.run())
    }
}
