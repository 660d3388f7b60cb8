//! Unified Error Model
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyglotError {
    #[error("KEY/{0}")]
    InvalidKey(String),

    #[error("PARSE/{source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("IO/{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DUP/{0}")]
    DuplicateKey(String),

    #[error("QLT/{key}: {message}")]
    Quality { key: String, message: String },

    #[error("CONFIG/{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PolyglotError>;

impl PolyglotError {
    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
