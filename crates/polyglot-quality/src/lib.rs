//! Polyglot Quality: data-quality review of comparison records
//!
//! Every record registered in a registry passes through a `QualityGate`.
//! Structural defects (a key that disagrees with the declared languages,
//! a record without syntax examples) block a record; incomplete content
//! only warns unless the profile escalates warnings.
//!
//! # Example
//!
//! ```ignore
//! use polyglot_core::{ComparisonRecord, PairKey};
//! use polyglot_quality::QualityGate;
//!
//! let key = PairKey::parse("go-rust")?;
//! let verdict = QualityGate::default().evaluate(&key, &ComparisonRecord::new("Go", "Rust"));
//! println!("{} (score: {})", verdict.verdict, verdict.score);
//! ```

pub mod checks;
pub mod gate;
pub mod issue;
pub mod profile;

pub use checks::{Check, CheckStatus};
pub use gate::{QualityGate, QualityVerdict, Verdict};
pub use issue::{DataQualityIssue, IssueKind};
pub use profile::QualityProfile;

use polyglot_core::{ComparisonRecord, PairKey, Result};

/// Quick evaluation with a named profile
pub fn evaluate(key: &PairKey, record: &ComparisonRecord, profile: &str) -> Result<QualityVerdict> {
    let gate = QualityGate::new(QualityProfile::for_name(profile)?);
    Ok(gate.evaluate(key, record))
}

/// Check if a record would be accepted under a named profile
pub fn would_pass(key: &PairKey, record: &ComparisonRecord, profile: &str) -> Result<bool> {
    Ok(!evaluate(key, record, profile)?.is_blocked())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_core::SyntaxExample;

    #[test]
    fn test_quick_evaluate() {
        let key = PairKey::parse("java-kotlin").unwrap();
        let record = ComparisonRecord::new("Java", "Kotlin").with_syntax_example(SyntaxExample::new(
            "Null Safety",
            "Nullable types",
            "String s = null;",
            "val s: String? = null",
        ));

        assert!(would_pass(&key, &record, "lenient").unwrap());
        assert!(!would_pass(&key, &record, "strict").unwrap());
        assert!(evaluate(&key, &record, "unknown").is_err());
    }
}
