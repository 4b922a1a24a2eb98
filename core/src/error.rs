use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The corpus file could not be opened.
    #[error("corpus unavailable at {path}: {source}")]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading lines from an already opened corpus failed.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// Best-match selection needs at least one corpus entry.
    #[error("corpus table is empty")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, MatchError>;
