//! Error types for extraction and retrieval.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Text expected to follow a fixed bullet or heading pattern does not.
    #[error("{step}: unexpected structure in '{text}'")]
    Structure { step: &'static str, text: String },

    /// A function's page could not be located, even after following redirects.
    #[error("failed to resolve documentation for function '{0}'")]
    Resolution(String),

    #[error("failed to fetch page '{page}'")]
    Http {
        page: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("unknown format: {0}. Use lua or json")]
    UnknownFormat(String),

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn structure(step: &'static str, text: impl Into<String>) -> Self {
        Error::Structure {
            step,
            text: text.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
