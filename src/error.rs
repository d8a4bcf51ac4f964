//! Error types for power analysis
//!
//! The numeric pipeline itself never fails. These errors come from the
//! opt-in validation layer and from scenario file handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for power analysis operations
pub type Result<T> = std::result::Result<T, PowerError>;

/// Errors that can occur while validating or loading an analysis scenario
#[derive(Debug, Error)]
pub enum PowerError {
    /// A physical parameter that must be strictly positive was not
    #[error("{chip}: {parameter} must be positive, got {value}")]
    NonPositiveParameter {
        /// Chip (or "analysis") the parameter belongs to
        chip: String,
        /// Parameter name
        parameter: &'static str,
        /// Offending value
        value: f64,
    },

    /// A model coefficient that must not be negative was
    #[error("{owner}: {parameter} must not be negative, got {value}")]
    NegativeParameter {
        /// Section the parameter belongs to
        owner: String,
        /// Parameter name
        parameter: &'static str,
        /// Offending value
        value: f64,
    },

    /// Scenario contains no chips to compare
    #[error("Scenario has no chip configurations")]
    EmptyScenario,

    /// Scenario file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Scenario file is not valid TOML for a `Scenario`
    #[error("Failed to parse scenario: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Scenario could not be rendered as TOML
    #[error("Failed to serialize scenario: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Results could not be rendered as JSON
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

impl PowerError {
    /// Create a non-positive parameter error
    pub fn non_positive(chip: impl Into<String>, parameter: &'static str, value: f64) -> Self {
        Self::NonPositiveParameter {
            chip: chip.into(),
            parameter,
            value,
        }
    }

    /// Create a negative parameter error
    pub fn negative(owner: impl Into<String>, parameter: &'static str, value: f64) -> Self {
        Self::NegativeParameter {
            owner: owner.into(),
            parameter,
            value,
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_message() {
        let err = PowerError::non_positive("Desktop GPU", "frequency_ghz", -2.0);
        assert_eq!(
            err.to_string(),
            "Desktop GPU: frequency_ghz must be positive, got -2"
        );
    }

    #[test]
    fn test_io_message_names_path() {
        let err = PowerError::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.toml"));
    }
}
