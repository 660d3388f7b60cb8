//! Polyglot Registry: lookup table of language comparison records
//!
//! Records are collected through a `RegistryBuilder` (deduplicating
//! repeated keys and running the quality gate), then frozen into an
//! immutable `ComparisonRegistry` that any number of readers can share.
//!
//! # Example
//!
//! ```ignore
//! use polyglot_registry::{loader, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! for doc in loader::load_dir("data".as_ref())? {
//!     builder.register_pair(doc.key, doc.record)?;
//! }
//! let (registry, report) = builder.build()?;
//!
//! match registry.get("php-javascript") {
//!     Some(record) => println!("{} examples", record.syntax_examples.len()),
//!     None => println!("not found"),
//! }
//! ```

pub mod builder;
pub mod config;
pub mod loader;
pub mod registry;

pub use builder::{BuildReport, DuplicatePolicy, RegistryBuilder};
pub use config::RegistryConfig;
pub use loader::{parse_document, ComparisonDocument, LoadFailure, LoadOutcome};
pub use registry::{ComparisonRegistry, RegistrySummary};

/// Build a registry from every document in the configured data directories.
///
/// Built-in data lives in `polyglot-data`; this only reads `config.data_dirs`.
pub fn open_dirs(
    config: &RegistryConfig,
) -> polyglot_core::Result<(ComparisonRegistry, BuildReport)> {
    let mut builder = config.builder()?;
    for dir in &config.data_dirs {
        for doc in loader::load_dir(dir)? {
            builder.register_pair(doc.key, doc.record)?;
        }
    }
    builder.build()
}
