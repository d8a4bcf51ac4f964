//! AI Chip Power Analysis - Command Line Interface
//!
//! Usage:
//!   chip-power                        Reference mobile/desktop/datacenter comparison
//!   chip-power --config FILE          Compare the chips in a TOML scenario
//!   chip-power --write-config FILE    Write the active scenario as TOML
//!   chip-power --json                 Machine-readable results

use std::path::PathBuf;

use clap::Parser;
use colored::*;
use log::{info, warn};

use ai_chip_power::prelude::*;

#[derive(Parser)]
#[command(name = "chip-power")]
#[command(about = "Power, thermal and efficiency estimates for AI accelerators")]
#[command(version)]
struct Cli {
    /// Output results in JSON format (for machine parsing)
    #[arg(long)]
    json: bool,

    /// Load the scenario (analysis parameters and chips) from a TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the active scenario to a TOML file and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,

    /// Reject non-positive frequency, voltage or capacitance before running
    #[arg(long)]
    strict: bool,

    /// Disable coloured headings
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        if cli.json {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("{}: {}", "Error".red(), e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let scenario = match &cli.config {
        Some(path) => {
            let scenario = Scenario::load(path)?;
            info!("Loaded {} chips from {}", scenario.chips.len(), path.display());
            scenario
        }
        None => Scenario::default(),
    };

    if cli.strict {
        scenario.validate()?;
    } else if let Err(e) = scenario.validate() {
        warn!("Continuing with unvalidated inputs: {}", e);
    }

    if let Some(path) = &cli.write_config {
        scenario.save(path)?;
        println!("Scenario written to {}", path.display());
        return Ok(());
    }

    let comparison = Comparator::from_scenario(scenario).run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    print_banner("AI HARDWARE COMPARISON");
    for analysis in &comparison.analyses {
        print!("{}", analysis);
    }
    print!("{}", SummaryTable(&comparison));

    let overheating = comparison.overheating_chips();
    if !overheating.is_empty() {
        println!();
        println!(
            "{}",
            format!(
                "Note: {} exceed the temperature limit under some cooling options",
                overheating.join(", ")
            )
            .yellow()
        );
    }

    Ok(())
}

fn print_banner(title: &str) {
    println!();
    println!("{}", "=".repeat(70).cyan());
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(70).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(config: Option<PathBuf>, write_config: Option<PathBuf>, strict: bool) -> Cli {
        Cli {
            json: false,
            config,
            write_config,
            strict,
            no_color: true,
        }
    }

    fn write_invalid_scenario(dir: &std::path::Path) -> PathBuf {
        let mut scenario = Scenario::default();
        scenario.analysis.unit.mac_units = 0;
        let path = dir.join("invalid.toml");
        scenario.save(&path).unwrap();
        path
    }

    #[test]
    fn test_strict_refuses_to_write_invalid_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_invalid_scenario(dir.path());
        let output = dir.path().join("out.toml");

        let err = run(&cli(Some(input), Some(output.clone()), true)).unwrap_err();
        assert!(matches!(err, PowerError::NonPositiveParameter { parameter: "mac_units", .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_permissive_writes_invalid_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_invalid_scenario(dir.path());
        let output = dir.path().join("out.toml");

        run(&cli(Some(input), Some(output.clone()), false)).unwrap();
        assert_eq!(Scenario::load(&output).unwrap().analysis.unit.mac_units, 0);
    }

    #[test]
    fn test_strict_accepts_reference_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("reference.toml");

        run(&cli(None, Some(output.clone()), true)).unwrap();
        assert_eq!(Scenario::load(&output).unwrap(), Scenario::default());
    }
}
