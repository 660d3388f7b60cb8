//! Comparison Registry: immutable lookup from pair key to record
use polyglot_core::{slugify, ComparisonRecord, PairKey, SyntaxExample, SHAPE_VERSION};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Frozen lookup table. Built once through `RegistryBuilder`, then only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonRegistry {
    records: HashMap<String, ComparisonRecord>,
}

/// Counts describing a registry, for dashboards and cache headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySummary {
    /// Record shape the presentation layer should expect
    pub shape_version: String,
    pub pairs: usize,
    pub languages: usize,
    pub syntax_examples: usize,
    pub pitfalls: usize,
    pub differences: usize,
    pub framework_comparisons: usize,
    pub fingerprint: String,
}

impl ComparisonRegistry {
    pub(crate) fn from_records(records: HashMap<String, ComparisonRecord>) -> Self {
        Self { records }
    }

    /// Record registered under `key`, or `None`. Malformed keys are plain misses.
    pub fn get(&self, key: &str) -> Option<&ComparisonRecord> {
        self.records.get(key)
    }

    /// Every registered key exactly once, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComparisonRecord)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn get_pair(&self, key: &PairKey) -> Option<&ComparisonRecord> {
        self.records.get(&key.to_string())
    }

    /// Lookup by display labels, ex: `lookup("C#", "Python")`
    pub fn lookup(&self, source_label: &str, target_label: &str) -> Option<&ComparisonRecord> {
        let key = PairKey::for_languages(source_label, target_label).ok()?;
        self.get_pair(&key)
    }

    /// Record for the opposite direction of `key`, if one is registered
    pub fn reverse_of(&self, key: &str) -> Option<&ComparisonRecord> {
        let key = PairKey::parse(key).ok()?;
        self.get_pair(&key.reversed())
    }

    /// Distinct language labels on either side of any pair, sorted
    pub fn languages(&self) -> Vec<&str> {
        let labels: BTreeSet<&str> = self
            .records
            .values()
            .flat_map(|r| [r.source_language.as_str(), r.target_language.as_str()])
            .collect();
        labels.into_iter().collect()
    }

    /// Keys whose record migrates away from `source_label`
    pub fn pairs_from(&self, source_label: &str) -> Vec<&str> {
        let slug = slugify(source_label);
        self.keys_where(|r| slugify(&r.source_language) == slug)
    }

    /// Keys whose record migrates towards `target_label`
    pub fn pairs_to(&self, target_label: &str) -> Vec<&str> {
        let slug = slugify(target_label);
        self.keys_where(|r| slugify(&r.target_language) == slug)
    }

    /// Syntax examples whose topic contains `query`, ignoring case, sorted by key
    pub fn find_topic(&self, query: &str) -> Vec<(&str, &SyntaxExample)> {
        let lowered = query.trim().to_lowercase();
        if lowered.is_empty() {
            return Vec::new();
        }
        let needle = lowered.as_str();
        let mut hits: Vec<(&str, &SyntaxExample)> = self
            .iter()
            .flat_map(move |(key, record)| {
                record
                    .syntax_examples
                    .iter()
                    .filter(move |e| e.topic.to_lowercase().contains(needle))
                    .map(move |e| (key, e))
            })
            .collect();
        // stable sort keeps authoring order within one record
        hits.sort_by(|a, b| a.0.cmp(b.0));
        hits
    }

    /// Content digest over sorted keys and records
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for key in self.list() {
            hasher.update(key.as_bytes());
            hasher.update(&[0]);
            if let Some(record) = self.records.get(key) {
                let canonical = serde_json::to_vec(record).unwrap_or_default();
                hasher.update(&canonical);
            }
            hasher.update(&[0]);
        }
        format!("blake3:{}", hasher.finalize())
    }

    pub fn summary(&self) -> RegistrySummary {
        let records = self.records.values();
        RegistrySummary {
            shape_version: SHAPE_VERSION.to_string(),
            pairs: self.len(),
            languages: self.languages().len(),
            syntax_examples: records.clone().map(|r| r.syntax_examples.len()).sum(),
            pitfalls: records.clone().map(|r| r.common_pitfalls.len()).sum(),
            differences: records.clone().map(|r| r.key_differences.len()).sum(),
            framework_comparisons: records.map(|r| r.frameworks().len()).sum(),
            fingerprint: self.fingerprint(),
        }
    }

    fn keys_where(&self, predicate: impl Fn(&ComparisonRecord) -> bool) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .iter()
            .filter(|(_, r)| predicate(r))
            .map(|(k, _)| k)
            .collect();
        keys.sort_unstable();
        keys
    }
}
