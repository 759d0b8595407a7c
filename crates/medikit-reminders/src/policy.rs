//! Adherence policy configuration.
//!
//! Whether a missed dose breaks the streak, and how much slack a dose gets
//! before it counts as past due, are deployment decisions rather than model
//! invariants. They are loaded from a small TOML document so the hosting
//! application can tune them without code changes.
//!
//! Example:
//! ```toml
//! reset_streak_on_miss = true
//! grace_minutes = 15
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use medikit_contracts::error::{MedikitError, MedikitResult};

/// Tunable adherence rules applied by the schedule model.
///
/// Every field has a default, so an empty TOML document is valid and a
/// partial one overrides only what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdherencePolicy {
    /// When true, a reminder that was active, inside its date window, and
    /// not marked taken by the day boundary has its streak reset to 0.
    pub reset_streak_on_miss: bool,

    /// Minutes past a scheduled dose time before the dose counts as past
    /// due. Zero means a dose is past due the moment its time has passed.
    pub grace_minutes: u32,
}

impl Default for AdherencePolicy {
    fn default() -> Self {
        Self {
            reset_streak_on_miss: true,
            grace_minutes: 0,
        }
    }
}

impl AdherencePolicy {
    /// Parse `s` as a TOML policy document.
    ///
    /// Returns `MedikitError::Config` if the TOML is malformed or does not
    /// match the expected schema.
    pub fn from_toml_str(s: &str) -> MedikitResult<Self> {
        toml::from_str(s).map_err(|e| MedikitError::Config {
            reason: format!("failed to parse adherence policy TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML policy document.
    pub fn from_file(path: &Path) -> MedikitResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedikitError::Config {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }
}
