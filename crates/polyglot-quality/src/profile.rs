//! Quality Profiles for dataset review
//!
//! Defines how strictly authored records are judged.

use polyglot_core::{PolyglotError, Result};
use serde::{Deserialize, Serialize};

/// Quality profile defining thresholds for comparison records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfile {
    /// Profile name (e.g., "lenient@1.0", "strict@1.0")
    pub name: String,

    /// Minimum syntax examples a record needs to be shown at all
    #[serde(default = "default_min_syntax_examples")]
    pub min_syntax_examples: usize,

    /// Escalate any warning to a blocking failure
    #[serde(default)]
    pub fail_on_warnings: bool,

    /// Maximum warnings tolerated before the record is blocked
    #[serde(default)]
    pub max_warnings: Option<u32>,
}

fn default_min_syntax_examples() -> usize {
    1
}

impl QualityProfile {
    /// Profile used while loading: only structural defects block a record
    pub fn lenient() -> Self {
        Self {
            name: "lenient@1.0".to_string(),
            min_syntax_examples: 1,
            fail_on_warnings: false,
            max_warnings: None,
        }
    }

    /// Profile used for content review of the shipped dataset
    pub fn strict() -> Self {
        Self {
            name: "strict@1.0".to_string(),
            min_syntax_examples: 3,
            fail_on_warnings: true,
            max_warnings: Some(0),
        }
    }

    /// Load profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| PolyglotError::Config(e.to_string()))
    }

    /// Get profile by name, ex: "strict" or "strict@1.0"
    pub fn for_name(name: &str) -> Result<Self> {
        match name.split('@').next().unwrap_or(name) {
            "lenient" => Ok(Self::lenient()),
            "strict" => Ok(Self::strict()),
            other => Err(PolyglotError::Config(format!(
                "unknown quality profile '{}'",
                other
            ))),
        }
    }
}

impl Default for QualityProfile {
    fn default() -> Self {
        Self::lenient()
    }
}
