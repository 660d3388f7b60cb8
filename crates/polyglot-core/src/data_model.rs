//! Data Model: ComparisonRecord and its entry types
//!
//! Field names serialize in camelCase, which is the shape the front-end reads.
use serde::{Deserialize, Serialize};

/// How one source language's constructs map onto a target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    /// Display label of the language being migrated from (ex: "PHP")
    pub source_language: String,
    /// Display label of the language being migrated to (ex: "JavaScript")
    pub target_language: String,
    #[serde(default)]
    pub syntax_examples: Vec<SyntaxExample>,
    #[serde(default)]
    pub common_pitfalls: Vec<CommonPitfall>,
    #[serde(default)]
    pub key_differences: Vec<KeyDifference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_comparisons: Option<Vec<FrameworkComparison>>,
}

/// Side-by-side snippet pair for one language feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxExample {
    pub topic: String,
    pub description: String,
    pub source_code: String,
    pub target_code: String,
}

/// A known migration mistake and its remedy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonPitfall {
    pub title: String,
    pub description: String,
    pub source_example: String,
    pub target_example: String,
    pub correct_approach: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDifference {
    pub topic: String,
    pub description: String,
    pub source_approach: String,
    pub target_approach: String,
}

/// Framework-level comparison inside one category (ex: "Web Framework").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkComparison {
    pub category: String,
    pub source_framework: FrameworkProfile,
    pub target_framework: FrameworkProfile,
    #[serde(default)]
    pub migration_tips: Vec<String>,
    #[serde(default)]
    pub common_pitfalls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkProfile {
    pub name: String,
    pub setup_code: String,
    pub basic_example: String,
    /// Set semantics; authoring order is display order
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Set semantics; authoring order is display order
    #[serde(default)]
    pub ecosystem: Vec<String>,
}

impl ComparisonRecord {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            syntax_examples: Vec::new(),
            common_pitfalls: Vec::new(),
            key_differences: Vec::new(),
            framework_comparisons: None,
        }
    }

    pub fn with_syntax_example(mut self, example: SyntaxExample) -> Self {
        self.syntax_examples.push(example);
        self
    }

    pub fn with_pitfall(mut self, pitfall: CommonPitfall) -> Self {
        self.common_pitfalls.push(pitfall);
        self
    }

    pub fn with_difference(mut self, difference: KeyDifference) -> Self {
        self.key_differences.push(difference);
        self
    }

    pub fn with_framework_comparison(mut self, comparison: FrameworkComparison) -> Self {
        self.framework_comparisons
            .get_or_insert_with(Vec::new)
            .push(comparison);
        self
    }

    /// Framework comparisons, empty when the record declares none
    pub fn frameworks(&self) -> &[FrameworkComparison] {
        self.framework_comparisons.as_deref().unwrap_or(&[])
    }

    /// First syntax example whose topic equals `topic`, ignoring case
    pub fn syntax_example(&self, topic: &str) -> Option<&SyntaxExample> {
        self.syntax_examples
            .iter()
            .find(|e| e.topic.eq_ignore_ascii_case(topic))
    }

    /// Only records with at least one syntax example are worth showing
    pub fn is_meaningful(&self) -> bool {
        !self.syntax_examples.is_empty()
    }
}

impl SyntaxExample {
    pub fn new(
        topic: impl Into<String>,
        description: impl Into<String>,
        source_code: impl Into<String>,
        target_code: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            description: description.into(),
            source_code: source_code.into(),
            target_code: target_code.into(),
        }
    }
}
