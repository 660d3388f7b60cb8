//! Record checks
//!
//! Each check inspects one aspect of a comparison record and yields a
//! single `Check`. Structural defects fail; incomplete content warns.

use crate::profile::QualityProfile;
use polyglot_core::{ComparisonRecord, FrameworkProfile, PairKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Single check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub impact: i32, // Score impact (negative)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

impl Check {
    fn ok(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.into(),
            impact: 0,
        }
    }

    fn warn(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            message: message.into(),
            impact: -10,
        }
    }

    fn fail(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            message: message.into(),
            impact: -40,
        }
    }
}

/// Run every record check in a fixed order
pub fn check_record(
    key: &PairKey,
    record: &ComparisonRecord,
    profile: &QualityProfile,
) -> Vec<Check> {
    vec![
        languages_present(record),
        key_matches_languages(key, record),
        has_syntax_examples(record, profile.min_syntax_examples),
        syntax_examples_complete(record),
        unique_topics(record),
        pitfalls_complete(record),
        differences_complete(record),
        frameworks_complete(record),
    ]
}

pub fn languages_present(record: &ComparisonRecord) -> Check {
    let empty_fields: Vec<&str> = [
        ("sourceLanguage", &record.source_language),
        ("targetLanguage", &record.target_language),
    ]
    .iter()
    .filter(|(_, label)| label.trim().is_empty())
    .map(|(field, _)| *field)
    .collect();

    if empty_fields.is_empty() {
        Check::ok(
            "languages_present",
            format!("{} -> {}", record.source_language, record.target_language),
        )
    } else {
        Check::fail("languages_present", format!("empty {}", empty_fields.join(", ")))
    }
}

pub fn key_matches_languages(key: &PairKey, record: &ComparisonRecord) -> Check {
    if key.matches_record(record) {
        Check::ok("key_matches_languages", key.to_string())
    } else {
        Check::fail(
            "key_matches_languages",
            format!(
                "key '{}' does not match declared languages {} -> {}",
                key, record.source_language, record.target_language
            ),
        )
    }
}

pub fn has_syntax_examples(record: &ComparisonRecord, minimum: usize) -> Check {
    let count = record.syntax_examples.len();
    if count == 0 {
        Check::fail("has_syntax_examples", "record has no syntax examples")
    } else if count < minimum {
        Check::warn(
            "has_syntax_examples",
            format!("{} syntax examples (min: {})", count, minimum),
        )
    } else {
        Check::ok("has_syntax_examples", format!("{} syntax examples", count))
    }
}

pub fn syntax_examples_complete(record: &ComparisonRecord) -> Check {
    let incomplete: Vec<String> = record
        .syntax_examples
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            blank(&e.topic)
                || blank(&e.description)
                || blank(&e.source_code)
                || blank(&e.target_code)
        })
        .map(|(i, e)| label_or_index(&e.topic, i))
        .collect();
    complete_or_warn("syntax_examples_complete", "syntax examples", &incomplete)
}

pub fn unique_topics(record: &ComparisonRecord) -> Check {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();
    for example in &record.syntax_examples {
        let topic = example.topic.trim().to_lowercase();
        if !seen.insert(topic.clone()) && reported.insert(topic) {
            repeated.push(example.topic.clone());
        }
    }

    if repeated.is_empty() {
        Check::ok("unique_topics", "syntax example topics are unique")
    } else {
        Check::warn(
            "unique_topics",
            format!("repeated topics: {}", repeated.join(", ")),
        )
    }
}

pub fn pitfalls_complete(record: &ComparisonRecord) -> Check {
    let incomplete: Vec<String> = record
        .common_pitfalls
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            blank(&p.title)
                || blank(&p.description)
                || blank(&p.source_example)
                || blank(&p.target_example)
                || blank(&p.correct_approach)
        })
        .map(|(i, p)| label_or_index(&p.title, i))
        .collect();
    complete_or_warn("pitfalls_complete", "pitfalls", &incomplete)
}

pub fn differences_complete(record: &ComparisonRecord) -> Check {
    let incomplete: Vec<String> = record
        .key_differences
        .iter()
        .enumerate()
        .filter(|(_, d)| {
            blank(&d.topic)
                || blank(&d.description)
                || blank(&d.source_approach)
                || blank(&d.target_approach)
        })
        .map(|(i, d)| label_or_index(&d.topic, i))
        .collect();
    complete_or_warn("differences_complete", "key differences", &incomplete)
}

pub fn frameworks_complete(record: &ComparisonRecord) -> Check {
    let mut problems = Vec::new();
    for comparison in record.frameworks() {
        if blank(&comparison.category) {
            problems.push("comparison with empty category".to_string());
        }
        for side in [&comparison.source_framework, &comparison.target_framework] {
            problems.extend(profile_problems(&comparison.category, side));
        }
    }

    if problems.is_empty() {
        Check::ok(
            "frameworks_complete",
            format!("{} framework comparisons", record.frameworks().len()),
        )
    } else {
        Check::warn("frameworks_complete", problems.join("; "))
    }
}

fn profile_problems(category: &str, profile: &FrameworkProfile) -> Vec<String> {
    let mut problems = Vec::new();
    if blank(&profile.name) {
        problems.push(format!("{}: framework with empty name", category));
    }
    if blank(&profile.setup_code) || blank(&profile.basic_example) {
        problems.push(format!("{}: {} is missing code", category, profile.name));
    }
    for (field, values) in [("strengths", &profile.strengths), ("ecosystem", &profile.ecosystem)] {
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.trim().to_lowercase()) {
                problems.push(format!(
                    "{}: {} repeats '{}' in {}",
                    category, profile.name, value, field
                ));
            }
        }
    }
    problems
}

fn complete_or_warn(name: &str, what: &str, incomplete: &[String]) -> Check {
    if incomplete.is_empty() {
        Check::ok(name, format!("all {} complete", what))
    } else {
        Check::warn(
            name,
            format!("incomplete {}: {}", what, incomplete.join(", ")),
        )
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn label_or_index(label: &str, index: usize) -> String {
    if blank(label) {
        format!("#{}", index)
    } else {
        label.to_string()
    }
}
