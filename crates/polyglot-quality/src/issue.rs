//! Data-quality issues surfaced while building a registry
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "name")]
pub enum IssueKind {
    /// A record check that warned or failed
    Check(String),
    /// Two differing records were authored under the same key
    DuplicateConflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub key: String,
    pub kind: IssueKind,
    pub message: String,
}

impl DataQualityIssue {
    pub fn duplicate_conflict(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: IssueKind::DuplicateConflict,
            message: message.into(),
        }
    }
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            IssueKind::Check(name) => write!(f, "{} [{}]: {}", self.key, name, self.message),
            IssueKind::DuplicateConflict => write!(f, "{} [duplicate]: {}", self.key, self.message),
        }
    }
}
