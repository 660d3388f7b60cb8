//! Pair keys: the `"source-target"` slug that indexes the registry
use crate::data_model::ComparisonRecord;
use crate::error::{PolyglotError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9+#._]+$").expect("valid slug pattern"));

/// Ordered (source, target) pair of language slugs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    source: String,
    target: String,
}

impl PairKey {
    /// Build from already-slugged components.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let target = target.into();
        for part in [&source, &target] {
            if !SLUG.is_match(part) {
                return Err(PolyglotError::InvalidKey(format!(
                    "'{}' is not a language slug",
                    part
                )));
            }
        }
        Ok(Self { source, target })
    }

    /// Parse `"source-target"`. Exactly one `-` is allowed.
    pub fn parse(key: &str) -> Result<Self> {
        let (source, target) = key
            .split_once('-')
            .ok_or_else(|| PolyglotError::InvalidKey(format!("'{}' has no '-' separator", key)))?;
        if target.contains('-') {
            return Err(PolyglotError::InvalidKey(format!(
                "'{}' has more than one '-' separator",
                key
            )));
        }
        Self::new(source, target)
    }

    /// Key for two display labels, ex: ("C#", "Python") -> "csharp-python"
    pub fn for_languages(source_label: &str, target_label: &str) -> Result<Self> {
        Self::new(slugify(source_label), slugify(target_label))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// True when the record's declared languages slug to this key's components
    pub fn matches_record(&self, record: &ComparisonRecord) -> bool {
        slugify(&record.source_language) == self.source
            && slugify(&record.target_language) == self.target
    }
}

/// Language label to slug. Symbols that carry meaning in a language name
/// are spelled out so "C#" and "C" stay distinct.
pub fn slugify(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    let spelled = match lowered.as_str() {
        "c#" => return "csharp".to_string(),
        "f#" => return "fsharp".to_string(),
        "c++" => return "cpp".to_string(),
        other => other.replace('#', "sharp").replace("++", "pp"),
    };
    spelled.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for PairKey {
    type Err = PolyglotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for PairKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PairKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
