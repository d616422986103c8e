use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QrawlError>;

/// Why a single GET did not produce a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport: {0}")]
    Transport(String),
}

/// A failed fetch, always tied to the URL that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch {url} failed: {cause}")]
pub struct FetchError {
    pub url: String,
    pub cause: FetchCause,
}

impl FetchError {
    pub fn status(url: &str, code: u16) -> Self {
        Self {
            url: url.to_string(),
            cause: FetchCause::Status(code),
        }
    }

    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            cause: FetchCause::Transport(message.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum QrawlError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("refusing to write an empty dataset to {}", .0.display())]
    EmptyDataset(PathBuf),
}

impl QrawlError {
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QrawlError::Write {
            path: path.into(),
            source,
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<serde_json::Error> for QrawlError {
    fn from(e: serde_json::Error) -> Self {
        QrawlError::Config(e.to_string())
    }
}
impl From<url::ParseError> for QrawlError {
    fn from(e: url::ParseError) -> Self {
        QrawlError::InvalidUrl(e.to_string())
    }
}
