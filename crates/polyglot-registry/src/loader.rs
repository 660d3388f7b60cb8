//! Dataset loading: one comparison per YAML or JSON document
//!
//! ```yaml
//! key: php-javascript
//! sourceLanguage: PHP
//! targetLanguage: JavaScript
//! syntaxExamples:
//!   - topic: Variables
//!     ...
//! ```

use crate::builder::RegistryBuilder;
use polyglot_core::{
    CommonPitfall, ComparisonRecord, FrameworkComparison, KeyDifference, PairKey, PolyglotError,
    Result, SyntaxExample,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// An authored document: the registry key plus the record fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentFields")]
pub struct ComparisonDocument {
    pub key: PairKey,
    #[serde(flatten)]
    pub record: ComparisonRecord,
}

/// Reading side of `ComparisonDocument`. Listing the fields instead of
/// flattening keeps the format's own deserializer in charge, so a plain
/// YAML scalar such as `sourceCode: 42` still reads as a string.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentFields {
    key: PairKey,
    source_language: String,
    target_language: String,
    #[serde(default)]
    syntax_examples: Vec<SyntaxExample>,
    #[serde(default)]
    common_pitfalls: Vec<CommonPitfall>,
    #[serde(default)]
    key_differences: Vec<KeyDifference>,
    #[serde(default)]
    framework_comparisons: Option<Vec<FrameworkComparison>>,
}

impl From<DocumentFields> for ComparisonDocument {
    fn from(fields: DocumentFields) -> Self {
        Self {
            key: fields.key,
            record: ComparisonRecord {
                source_language: fields.source_language,
                target_language: fields.target_language,
                syntax_examples: fields.syntax_examples,
                common_pitfalls: fields.common_pitfalls,
                key_differences: fields.key_differences,
                framework_comparisons: fields.framework_comparisons,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Format for a file name, by extension
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A document that could not be read or parsed
#[derive(Debug)]
pub struct LoadFailure {
    pub source_name: String,
    pub error: PolyglotError,
}

/// Documents loaded from a directory, plus the ones that were skipped
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub documents: Vec<ComparisonDocument>,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    /// Register every loaded document, in load order
    pub fn register_into(self, builder: &mut RegistryBuilder) -> Result<Vec<LoadFailure>> {
        for doc in self.documents {
            builder.register_pair(doc.key, doc.record)?;
        }
        Ok(self.failures)
    }
}

/// Parse one document; `source_name` picks the format and labels errors
pub fn parse_document(source_name: &str, text: &str) -> Result<ComparisonDocument> {
    let format = DocumentFormat::from_name(source_name).ok_or_else(|| {
        PolyglotError::parse(
            source_name,
            "unsupported extension (expected .yaml, .yml or .json)",
        )
    })?;
    let doc: ComparisonDocument = match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| PolyglotError::parse(source_name, e))?
        }
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|e| PolyglotError::parse(source_name, e))?
        }
    };
    debug!(source = source_name, key = %doc.key, "parsed comparison document");
    Ok(doc)
}

/// Serialize a document back to YAML, for authoring tools
pub fn to_yaml(doc: &ComparisonDocument) -> Result<String> {
    serde_yaml::to_string(doc).map_err(|e| PolyglotError::parse(doc.key.to_string(), e))
}

pub fn load_file(path: &Path) -> Result<ComparisonDocument> {
    let text = std::fs::read_to_string(path).map_err(|e| PolyglotError::io(path, e))?;
    parse_document(&path.to_string_lossy(), &text)
}

/// Dataset files in `dir`, sorted by file name
pub fn dataset_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PolyglotError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| PolyglotError::io(dir, e))?.path();
        let is_dataset = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(DocumentFormat::from_name)
                .is_some();
        if is_dataset {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every document in `dir`; the first bad file aborts
pub fn load_dir(dir: &Path) -> Result<Vec<ComparisonDocument>> {
    dataset_files(dir)?
        .iter()
        .map(|path| load_file(path))
        .collect()
}

/// Load every document in `dir`, collecting bad files instead of aborting
pub fn load_dir_lenient(dir: &Path) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();
    for path in dataset_files(dir)? {
        match load_file(&path) {
            Ok(doc) => outcome.documents.push(doc),
            Err(err) => {
                error!(path = %path.display(), "skipping comparison document: {}", err);
                outcome.failures.push(LoadFailure {
                    source_name: path.display().to_string(),
                    error: err,
                });
            }
        }
    }
    Ok(outcome)
}
