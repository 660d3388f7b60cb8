//! Integration tests for the embedded dataset and the built-in registry.

use polyglot_core::{PairKey, PolyglotError};
use polyglot_quality::{QualityGate, QualityProfile, Verdict};
use polyglot_registry::{parse_document, DuplicatePolicy, RegistryBuilder, RegistryConfig};
use std::collections::HashSet;
use std::path::PathBuf;

/// Get the absolute path to a fixture dataset directory
fn fixture(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap();
    workspace_root.join("testing/fixtures/datasets").join(name)
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_php_javascript_lookup() {
    let record = polyglot_data::get("php-javascript").unwrap();
    assert_eq!(record.source_language, "PHP");
    assert_eq!(record.target_language, "JavaScript");
    assert!(record.syntax_examples.iter().any(|e| e.topic == "Variables"));
}

#[test]
fn test_missing_pair_is_none() {
    assert!(polyglot_data::get("nonexistent-pair").is_none());
    assert!(polyglot_data::builtin().get("").is_none());
}

#[test]
fn test_every_record_has_labels_and_examples() {
    let registry = polyglot_data::builtin();
    assert!(!registry.is_empty());
    for key in registry.list() {
        let record = registry.get(key).unwrap();
        assert!(!record.source_language.trim().is_empty(), "{}", key);
        assert!(!record.target_language.trim().is_empty(), "{}", key);
        assert!(!record.syntax_examples.is_empty(), "{}", key);
    }
}

#[test]
fn test_list_matches_documents_exactly() {
    let listed = polyglot_data::list();
    let unique: HashSet<&str> = listed.iter().copied().collect();
    assert_eq!(unique.len(), listed.len());

    let authored: HashSet<String> = polyglot_data::documents()
        .iter()
        .map(|(name, text)| parse_document(name, text).unwrap().key.to_string())
        .collect();
    let listed: HashSet<String> = listed.into_iter().map(String::from).collect();
    assert_eq!(listed, authored);
}

#[test]
fn test_builtin_loaded_cleanly() {
    assert!(polyglot_data::builtin_failures().is_empty());
    let report = polyglot_data::builtin_report();
    assert!(report.is_clean(), "{:?}", report.issues);
    assert!(report.identical_duplicates.is_empty());
    assert_eq!(report.keys.len(), polyglot_data::documents().len());
}

// =============================================================================
// Content review
// =============================================================================

#[test]
fn test_every_document_passes_strict_review() {
    let gate = QualityGate::new(QualityProfile::strict());
    for (name, text) in polyglot_data::documents() {
        let doc = parse_document(name, text).unwrap();
        let verdict = gate.evaluate(&doc.key, &doc.record);
        assert_eq!(verdict.verdict, Verdict::Ok, "{}: {}", name, verdict.summary);
    }
}

#[test]
fn test_keys_match_declared_languages() {
    for (key, record) in polyglot_data::builtin().iter() {
        let parsed = PairKey::parse(key).unwrap();
        assert!(parsed.matches_record(record), "{}", key);
    }
}

#[test]
fn test_json_shape_for_front_end() {
    let record = polyglot_data::get("javascript-typescript").unwrap();
    let value = serde_json::to_value(record).unwrap();
    assert_eq!(value["sourceLanguage"], "JavaScript");
    assert!(value["syntaxExamples"][0]["targetCode"].is_string());
    assert!(value["keyDifferences"][0]["sourceApproach"].is_string());
    assert!(value.get("frameworkComparisons").is_none());

    let with_frameworks = serde_json::to_value(polyglot_data::get("java-kotlin").unwrap()).unwrap();
    let framework = &with_frameworks["frameworkComparisons"][0]["targetFramework"];
    assert_eq!(framework["name"], "Ktor");
    assert!(framework["setupCode"].is_string());
}

#[test]
fn test_record_round_trips_through_builder() {
    let original = polyglot_data::get("go-rust").unwrap().clone();
    let mut builder = RegistryBuilder::new();
    builder.register("go-rust", original.clone()).unwrap();
    let (registry, _) = builder.build().unwrap();
    assert_eq!(registry.get("go-rust"), Some(&original));
}

#[test]
fn test_fingerprint_is_stable() {
    let (rebuilt, _) = polyglot_data::open(&RegistryConfig::default()).unwrap();
    assert_eq!(rebuilt.fingerprint(), polyglot_data::builtin().fingerprint());
    assert_eq!(rebuilt.summary().pairs, polyglot_data::documents().len());
}

// =============================================================================
// Opening with extra data
// =============================================================================

#[test]
fn test_open_merges_extra_dirs() {
    let config = RegistryConfig {
        data_dirs: vec![fixture("valid")],
        ..RegistryConfig::default()
    };
    let (registry, report) = polyglot_data::open(&config).unwrap();

    // both fixture keys also ship built in, with different content
    assert_eq!(registry.len(), polyglot_data::documents().len());
    assert_eq!(registry.get("go-rust"), polyglot_data::get("go-rust"));
    assert_eq!(report.issues.len(), 2);
}

#[test]
fn test_open_extra_dirs_keep_last() {
    let config = RegistryConfig {
        data_dirs: vec![fixture("valid")],
        duplicate_policy: DuplicatePolicy::KeepLast,
        ..RegistryConfig::default()
    };
    let (registry, _) = polyglot_data::open(&config).unwrap();
    assert_eq!(registry.get("go-rust").unwrap().syntax_examples.len(), 1);
}

#[test]
fn test_open_without_builtin() {
    let config = RegistryConfig {
        include_builtin: false,
        data_dirs: vec![fixture("valid")],
        ..RegistryConfig::default()
    };
    let (registry, _) = polyglot_data::open(&config).unwrap();
    assert_eq!(registry.list(), vec!["go-rust", "ruby-python"]);
}

#[test]
fn test_open_strict_rejects_thin_records() {
    let config = RegistryConfig {
        include_builtin: false,
        data_dirs: vec![fixture("valid")],
        strict: true,
        quality_profile: "strict".to_string(),
        ..RegistryConfig::default()
    };
    assert!(matches!(
        polyglot_data::open(&config),
        Err(PolyglotError::Quality { .. })
    ));
}

#[test]
fn test_open_builtin_strict() {
    let config = RegistryConfig {
        strict: true,
        quality_profile: "strict".to_string(),
        ..RegistryConfig::default()
    };
    let (registry, report) = polyglot_data::open(&config).unwrap();
    assert_eq!(registry.len(), polyglot_data::documents().len());
    assert!(report.blocked().is_empty());
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                polyglot_data::get("php-javascript").map(|r| r.syntax_examples.len())
            })
        })
        .collect();
    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
    assert!(counts[0].unwrap() >= 1);
}

#[test]
fn test_scratch_dir_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let (name, text) = polyglot_data::documents()
        .iter()
        .find(|(name, _)| *name == "ruby-python.yaml")
        .unwrap();
    let edited = text.replace("topic: Classes", "topic: Classes and Objects");
    std::fs::write(dir.path().join(name), edited).unwrap();

    let config = RegistryConfig {
        data_dirs: vec![dir.path().to_path_buf()],
        duplicate_policy: DuplicatePolicy::KeepLast,
        ..RegistryConfig::default()
    };
    let (registry, report) = polyglot_data::open(&config).unwrap();
    let record = registry.get("ruby-python").unwrap();
    assert!(record.syntax_example("Classes and Objects").is_some());
    assert_eq!(report.issues.len(), 1);
}
