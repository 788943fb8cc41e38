//! Error types for the discovery engine.

/// Errors raised while discovering candidate words in a corpus.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read corpus: {source}")]
    Read { source: std::io::Error },

    #[error("failed to write output: {source}")]
    Write { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
