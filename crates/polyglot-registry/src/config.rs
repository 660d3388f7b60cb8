//! Registry configuration: YAML file plus environment overrides
use crate::builder::{DuplicatePolicy, RegistryBuilder};
use polyglot_core::{PolyglotError, Result};
use polyglot_quality::QualityProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_DATA_DIR: &str = "POLYGLOT_DATA_DIR";
pub const ENV_STRICT: &str = "POLYGLOT_STRICT";
pub const ENV_DUPLICATES: &str = "POLYGLOT_DUPLICATES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Start from the dataset compiled into the binary
    pub include_builtin: bool,
    /// Extra dataset directories, loaded after the built-in documents
    pub data_dirs: Vec<PathBuf>,
    pub duplicate_policy: DuplicatePolicy,
    /// Abort the build when a record is blocked by the quality gate
    pub strict: bool,
    /// Quality profile name ("lenient" or "strict")
    pub quality_profile: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            data_dirs: Vec::new(),
            duplicate_policy: DuplicatePolicy::KeepFirst,
            strict: false,
            quality_profile: "lenient".to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| PolyglotError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PolyglotError::io(path, e))?;
        Self::from_yaml(&text)
    }

    /// Overlay `POLYGLOT_DATA_DIR`, `POLYGLOT_STRICT` and `POLYGLOT_DUPLICATES`
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    /// Same as `with_env` with an injectable variable source
    pub fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(dir) = var(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.data_dirs.push(PathBuf::from(dir));
        }
        if let Some(flag) = var(ENV_STRICT) {
            self.strict = parse_flag(ENV_STRICT, &flag)?;
        }
        if let Some(policy) = var(ENV_DUPLICATES) {
            self.duplicate_policy = policy.parse()?;
        }
        Ok(self)
    }

    pub fn profile(&self) -> Result<QualityProfile> {
        QualityProfile::for_name(&self.quality_profile)
    }

    /// A builder configured with this policy, strictness and profile
    pub fn builder(&self) -> Result<RegistryBuilder> {
        Ok(RegistryBuilder::new()
            .duplicate_policy(self.duplicate_policy)
            .strict(self.strict)
            .quality_profile(self.profile()?))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(PolyglotError::Config(format!(
            "{} expects a boolean, got '{}'",
            name, other
        ))),
    }
}
