//! AI Chip Power Analysis
//!
//! First-order power, thermal and efficiency estimates for AI accelerators,
//! meant for back-of-envelope sizing comparisons between mobile, desktop and
//! datacenter parts.
//!
//! # Model
//!
//! - **Dynamic power**: `α·C·V²·f` per MAC unit, summed over all units
//! - **Static power**: a fixed fraction of dynamic power (30 % by default)
//! - **Thermal**: `T = T_ambient + P·θ` for each cooling option
//! - **Performance**: one MAC per unit per cycle, efficiency in GOPS/W
//!
//! Process node is carried for display only and does not enter any formula.
//!
//! # Quick Start
//!
//! ```rust
//! use ai_chip_power::prelude::*;
//!
//! let model = PowerModel::new("Mobile AI Accelerator", 5.0, 1.0);
//! let (power_watts, ops_per_second) = model.run_full_analysis();
//! assert!((power_watts - 0.832).abs() < 1e-9);
//! assert_eq!(ops_per_second, 1.28e11);
//!
//! // Full breakdown, rendered as text
//! let analysis = model.analyze();
//! println!("{}", analysis);
//! ```
//!
//! # Comparing Chips
//!
//! ```rust
//! use ai_chip_power::prelude::*;
//!
//! let comparison = Comparator::reference().run();
//! for entry in &comparison.entries {
//!     println!("{}: {:.2} GOPS/W", entry.name, entry.efficiency_gops_per_watt);
//! }
//! ```

pub mod config;
pub mod error;
pub mod thermal;
pub mod power;
pub mod comparison;
pub mod report;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::{AnalysisConfig, ChipConfig, CoolingOption, ModelParameters,
                           Scenario, UnitSpec};
    pub use crate::error::{PowerError, Result};
    pub use crate::thermal::{ThermalAssessment, ThermalStatus};
    pub use crate::power::{ChipAnalysis, Performance, PowerBreakdown, PowerModel};
    pub use crate::comparison::{Comparator, Comparison, ComparisonEntry, KEY_INSIGHTS};
    pub use crate::report::SummaryTable;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
