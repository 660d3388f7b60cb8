//! Quality Gate evaluation for comparison records
//!
//! Evaluates a record against a quality profile and produces
//! a verdict (OK, WARN, BLOCK).

use crate::checks::{check_record, Check, CheckStatus};
use crate::issue::{DataQualityIssue, IssueKind};
use crate::profile::QualityProfile;
use polyglot_core::{ComparisonRecord, PairKey};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Ok,
    Warn,
    Block,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warn => write!(f, "WARN"),
            Self::Block => write!(f, "BLOCK"),
        }
    }
}

/// Overall quality verdict for one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityVerdict {
    /// Registry key of the evaluated record
    pub key: String,

    pub verdict: Verdict,

    /// Numeric score (0-100)
    pub score: u32,

    /// Individual check results
    pub checks: Vec<Check>,

    /// Profile used for evaluation
    pub profile: String,

    pub summary: String,
}

impl QualityVerdict {
    pub fn is_blocked(&self) -> bool {
        self.verdict == Verdict::Block
    }

    /// Non-passing checks flattened into issues
    pub fn issues(&self) -> Vec<DataQualityIssue> {
        self.checks
            .iter()
            .filter(|c| c.status != CheckStatus::Ok)
            .map(|c| DataQualityIssue {
                key: self.key.clone(),
                kind: IssueKind::Check(c.name.clone()),
                message: c.message.clone(),
            })
            .collect()
    }
}

/// Quality gate that evaluates comparison records
#[derive(Debug, Clone)]
pub struct QualityGate {
    profile: QualityProfile,
}

impl QualityGate {
    pub fn new(profile: QualityProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &QualityProfile {
        &self.profile
    }

    /// Evaluate a record against the quality profile
    pub fn evaluate(&self, key: &PairKey, record: &ComparisonRecord) -> QualityVerdict {
        let checks = check_record(key, record, &self.profile);

        let score = (100 + checks.iter().map(|c| c.impact).sum::<i32>()).max(0);

        let fails: Vec<&str> = names_with(&checks, CheckStatus::Fail);
        let warns: Vec<&str> = names_with(&checks, CheckStatus::Warn);

        let too_many_warnings = self
            .profile
            .max_warnings
            .map(|max| warns.len() as u32 > max)
            .unwrap_or(false);

        let escalated = !warns.is_empty() && self.profile.fail_on_warnings;
        let verdict = if !fails.is_empty() || escalated || too_many_warnings {
            Verdict::Block
        } else if !warns.is_empty() {
            Verdict::Warn
        } else {
            Verdict::Ok
        };

        let summary = match verdict {
            Verdict::Block if fails.is_empty() => {
                format!("Blocked by warnings: {}", warns.join(", "))
            }
            Verdict::Block => format!("Blocked: {}", fails.join(", ")),
            Verdict::Warn => format!("Passed with warnings: {}", warns.join(", ")),
            Verdict::Ok => "All checks passed".to_string(),
        };

        QualityVerdict {
            key: key.to_string(),
            verdict,
            score: score as u32,
            checks,
            profile: self.profile.name.clone(),
            summary,
        }
    }
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::new(QualityProfile::default())
    }
}

fn names_with(checks: &[Check], status: CheckStatus) -> Vec<&str> {
    checks
        .iter()
        .filter(|c| c.status == status)
        .map(|c| c.name.as_str())
        .collect()
}
