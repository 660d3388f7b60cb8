//! Registry Builder: collects authored records, resolves duplicates, then freezes
use crate::registry::ComparisonRegistry;
use polyglot_core::{ComparisonRecord, PairKey, PolyglotError, Result};
use polyglot_quality::{DataQualityIssue, QualityGate, QualityProfile, QualityVerdict};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Which record survives when two differing records share a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    KeepFirst,
    KeepLast,
    Reject,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = PolyglotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "keep_first" | "first" => Ok(Self::KeepFirst),
            "keep_last" | "last" => Ok(Self::KeepLast),
            "reject" => Ok(Self::Reject),
            other => Err(PolyglotError::Config(format!(
                "unknown duplicate policy '{}'",
                other
            ))),
        }
    }
}

/// What happened while building a registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    /// Registered keys, sorted
    pub keys: Vec<String>,
    /// Keys that were authored more than once with identical content
    pub identical_duplicates: Vec<String>,
    /// Conflicting duplicates and failed checks
    pub issues: Vec<DataQualityIssue>,
    /// One verdict per registered record, sorted by key
    pub verdicts: Vec<QualityVerdict>,
}

impl BuildReport {
    pub fn blocked(&self) -> Vec<&QualityVerdict> {
        self.verdicts.iter().filter(|v| v.is_blocked()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug)]
pub struct RegistryBuilder {
    records: HashMap<PairKey, ComparisonRecord>,
    policy: DuplicatePolicy,
    strict: bool,
    gate: QualityGate,
    identical_duplicates: Vec<String>,
    conflicts: Vec<DataQualityIssue>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            policy: DuplicatePolicy::default(),
            strict: false,
            gate: QualityGate::default(),
            identical_duplicates: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fail `build` when any record is blocked by the quality gate
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn quality_profile(mut self, profile: QualityProfile) -> Self {
        self.gate = QualityGate::new(profile);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register `record` under `key` (`"source-target"`).
    pub fn register(&mut self, key: &str, record: ComparisonRecord) -> Result<&mut Self> {
        let key = PairKey::parse(key)?;
        self.register_pair(key, record)
    }

    pub fn register_pair(&mut self, key: PairKey, record: ComparisonRecord) -> Result<&mut Self> {
        match self.records.get_mut(&key) {
            None => {
                debug!(key = %key, "registered comparison");
                self.records.insert(key, record);
            }
            Some(existing) if *existing == record => {
                debug!(key = %key, "dropped identical duplicate");
                self.identical_duplicates.push(key.to_string());
            }
            Some(existing) => {
                if self.policy == DuplicatePolicy::Reject {
                    return Err(PolyglotError::DuplicateKey(format!(
                        "'{}' is defined more than once with differing content",
                        key
                    )));
                }
                let kept = match self.policy {
                    DuplicatePolicy::KeepLast => {
                        *existing = record;
                        "last"
                    }
                    _ => "first",
                };
                warn!(key = %key, kept, "conflicting duplicate definitions");
                self.conflicts.push(DataQualityIssue::duplicate_conflict(
                    key.to_string(),
                    format!("differing definitions; kept the {} one", kept),
                ));
            }
        }
        Ok(self)
    }

    /// Freeze into an immutable registry, running the quality gate over every record.
    pub fn build(self) -> Result<(ComparisonRegistry, BuildReport)> {
        let mut keys: Vec<&PairKey> = self.records.keys().collect();
        keys.sort();

        let mut verdicts = Vec::with_capacity(keys.len());
        let mut issues = self.conflicts.clone();
        for key in keys {
            if let Some(record) = self.records.get(key) {
                let verdict = self.gate.evaluate(key, record);
                for issue in verdict.issues() {
                    warn!(key = %key, "{}", issue);
                    issues.push(issue);
                }
                if self.strict && verdict.is_blocked() {
                    return Err(PolyglotError::Quality {
                        key: key.to_string(),
                        message: verdict.summary,
                    });
                }
                verdicts.push(verdict);
            }
        }

        let records: HashMap<String, ComparisonRecord> = self
            .records
            .into_iter()
            .map(|(k, r)| (k.to_string(), r))
            .collect();
        let registry = ComparisonRegistry::from_records(records);

        let report = BuildReport {
            keys: registry.list().into_iter().map(String::from).collect(),
            identical_duplicates: self.identical_duplicates,
            issues,
            verdicts,
        };

        info!(
            pairs = registry.len(),
            issues = report.issues.len(),
            profile = %self.gate.profile().name,
            "comparison registry built"
        );

        Ok((registry, report))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_core::SyntaxExample;
    use polyglot_quality::IssueKind;

    fn record(code: &str) -> ComparisonRecord {
        ComparisonRecord::new("C#", "Python").with_syntax_example(SyntaxExample::new(
            "Dictionaries",
            "Key/value maps",
            code,
            "ages = {\"Ada\": 36}",
        ))
    }

    #[test]
    fn test_round_trip() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("csharp-python", record("var ages = new Dictionary<string, int>();"))
            .unwrap();
        let (registry, report) = builder.build().unwrap();

        assert_eq!(
            registry.get("csharp-python"),
            Some(&record("var ages = new Dictionary<string, int>();"))
        );
        assert_eq!(report.keys, vec!["csharp-python"]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let mut builder = RegistryBuilder::new();
        let err = builder.register("C#->Python", record("x")).unwrap_err();
        assert!(matches!(err, PolyglotError::InvalidKey(_)));
    }

    #[test]
    fn test_identical_duplicate_dropped_silently() {
        let mut builder = RegistryBuilder::new();
        builder.register("csharp-python", record("a")).unwrap();
        builder.register("csharp-python", record("a")).unwrap();
        let (registry, report) = builder.build().unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(report.identical_duplicates, vec!["csharp-python"]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_conflicting_duplicate_keeps_first_by_default() {
        let mut builder = RegistryBuilder::new();
        builder.register("csharp-python", record("first")).unwrap();
        builder.register("csharp-python", record("second")).unwrap();
        let (registry, report) = builder.build().unwrap();

        assert_eq!(registry.get("csharp-python"), Some(&record("first")));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::DuplicateConflict);
    }

    #[test]
    fn test_conflicting_duplicate_keep_last() {
        let mut builder = RegistryBuilder::new().duplicate_policy(DuplicatePolicy::KeepLast);
        builder.register("csharp-python", record("first")).unwrap();
        builder.register("csharp-python", record("second")).unwrap();
        let (registry, _) = builder.build().unwrap();

        assert_eq!(registry.get("csharp-python"), Some(&record("second")));
    }

    #[test]
    fn test_conflicting_duplicate_reject() {
        let mut builder = RegistryBuilder::new().duplicate_policy(DuplicatePolicy::Reject);
        builder.register("csharp-python", record("first")).unwrap();
        let err = builder.register("csharp-python", record("second")).unwrap_err();
        assert!(matches!(err, PolyglotError::DuplicateKey(_)));
    }

    #[test]
    fn test_mismatched_record_reported_or_rejected() {
        let mut lenient = RegistryBuilder::new();
        lenient.register("python-csharp", record("x")).unwrap();
        let (registry, report) = lenient.build().unwrap();
        assert!(registry.contains("python-csharp"));
        assert_eq!(report.blocked().len(), 1);

        let mut strict = RegistryBuilder::new().strict(true);
        strict.register("python-csharp", record("x")).unwrap();
        assert!(matches!(strict.build(), Err(PolyglotError::Quality { .. })));
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("keep-last".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::KeepLast);
        assert_eq!("REJECT".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Reject);
        assert!("newest".parse::<DuplicatePolicy>().is_err());
    }
}
