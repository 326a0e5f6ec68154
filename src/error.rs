use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to retrieve wordlist from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("wordlist from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target URL must not be empty")]
    EmptyTarget,

    #[error("dictionary URL must not be empty")]
    EmptyDictionary,

    #[error("thread count must be at least 1")]
    NoWorkers,
}

/// Failure of a single probe. Never escapes the worker that hit it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}
