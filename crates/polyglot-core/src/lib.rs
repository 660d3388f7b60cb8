//! Polyglot Core: comparison record shapes, pair keys and the error model
//!
//! A comparison record describes how the constructs of one programming
//! language map onto another. Records are looked up by a pair key of the
//! form `"source-target"` (ex: `"php-javascript"`).

pub mod data_model;
pub mod error;
pub mod key;
pub mod telemetry;

pub use data_model::{
    CommonPitfall, ComparisonRecord, FrameworkComparison, FrameworkProfile, KeyDifference,
    SyntaxExample,
};
pub use error::{PolyglotError, Result};
pub use key::{slugify, PairKey};

/// Version of the record shape handed to presentation layers
pub const SHAPE_VERSION: &str = "1.0.0";
