//! Polyglot Data: the authored language comparison dataset
//!
//! The dataset is a set of YAML documents compiled into the crate. The
//! built-in registry is assembled from them once, on first use, and is
//! shared read-only afterwards.
//!
//! # Example
//!
//! ```ignore
//! let registry = polyglot_data::builtin();
//! if let Some(record) = registry.get("php-javascript") {
//!     for example in &record.syntax_examples {
//!         println!("{}", example.topic);
//!     }
//! }
//! ```

mod dataset;

use once_cell::sync::Lazy;
use polyglot_core::{ComparisonRecord, Result};
use polyglot_registry::{
    loader, parse_document, BuildReport, ComparisonRegistry, LoadFailure, RegistryBuilder,
    RegistryConfig,
};
use tracing::error;

struct Builtin {
    registry: ComparisonRegistry,
    report: BuildReport,
    failures: Vec<LoadFailure>,
}

static BUILTIN: Lazy<Builtin> = Lazy::new(build_builtin);

fn build_builtin() -> Builtin {
    let mut builder = RegistryBuilder::new();
    let mut failures = Vec::new();

    for (name, text) in dataset::DOCUMENTS {
        let registered = parse_document(name, text)
            .and_then(|doc| builder.register_pair(doc.key, doc.record).map(|_| ()));
        if let Err(err) = registered {
            error!(document = *name, "skipping built-in comparison: {}", err);
            failures.push(LoadFailure {
                source_name: name.to_string(),
                error: err,
            });
        }
    }

    match builder.build() {
        Ok((registry, report)) => Builtin {
            registry,
            report,
            failures,
        },
        Err(err) => {
            error!("built-in comparison registry is empty: {}", err);
            Builtin {
                registry: ComparisonRegistry::default(),
                report: BuildReport::default(),
                failures,
            }
        }
    }
}

/// The registry built from the embedded dataset
pub fn builtin() -> &'static ComparisonRegistry {
    &BUILTIN.registry
}

/// Build report of the embedded dataset (duplicates, quality verdicts)
pub fn builtin_report() -> &'static BuildReport {
    &BUILTIN.report
}

/// Embedded documents that could not be parsed or registered
pub fn builtin_failures() -> &'static [LoadFailure] {
    &BUILTIN.failures
}

/// Embedded `(file name, YAML text)` pairs
pub fn documents() -> &'static [(&'static str, &'static str)] {
    dataset::DOCUMENTS
}

/// Record for `key` in the built-in registry
pub fn get(key: &str) -> Option<&'static ComparisonRecord> {
    builtin().get(key)
}

/// Every key of the built-in registry
pub fn list() -> Vec<&'static str> {
    builtin().list()
}

/// Build a registry from the embedded dataset (if enabled) and the
/// configured data directories. Later sources go through the same
/// builder, so their duplicates are resolved by the configured policy.
pub fn open(config: &RegistryConfig) -> Result<(ComparisonRegistry, BuildReport)> {
    let mut builder = config.builder()?;
    if config.include_builtin {
        for (name, text) in dataset::DOCUMENTS {
            let doc = parse_document(name, text)?;
            builder.register_pair(doc.key, doc.record)?;
        }
    }
    for dir in &config.data_dirs {
        for doc in loader::load_dir(dir)? {
            builder.register_pair(doc.key, doc.record)?;
        }
    }
    builder.build()
}

/// `open` with the default configuration overlaid by `POLYGLOT_*` variables
pub fn open_from_env() -> Result<(ComparisonRegistry, BuildReport)> {
    open(&RegistryConfig::default().with_env()?)
}
