//! Error types for pokedex-loader
//!
//! This module provides the error taxonomy of the library:
//! - [`HttpStatusError`] for a single record answered with a non-success status
//! - [`BatchFetchError`] for a batch discarded because one of its items failed
//! - transport, decoding, URL and configuration errors wrapped in [`Error`]
//!
//! A malformed record object is never an error: missing or wrongly typed
//! fields degrade into empty values during mapping (see [`crate::mapper`]).
//! Only a body that is not a JSON object fails, as [`Error::Serialization`].

use crate::types::PokemonId;
use thiserror::Error;

/// Result type alias for pokedex-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pokedex-loader
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "page_size")
        key: Option<String>,
    },

    /// The API answered a single record request with a non-success status
    #[error(transparent)]
    HttpStatus(#[from] HttpStatusError),

    /// A batch was discarded because one of its items failed
    #[error(transparent)]
    Batch(#[from] BatchFetchError),

    /// A page of IDs would run past the largest representable ID
    #[error("range of {count} IDs starting at {start} exceeds the ID space")]
    RangeOverflow {
        /// First ID of the range
        start: PokemonId,
        /// Number of IDs the range asked for
        count: usize,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error (response body or config file is not valid JSON)
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a configuration key
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::HttpStatus(e) if e.is_not_found() => "not_found",
            Error::HttpStatus(_) => "http_status",
            Error::Batch(_) => "batch_failed",
            Error::RangeOverflow { .. } => "range_overflow",
            Error::Network(_) => "network_error",
            Error::Serialization(_) => "serialization_error",
            Error::InvalidUrl(_) => "invalid_url",
            Error::Io(_) => "io_error",
        }
    }
}

/// Non-success HTTP status for one record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status} fetching record {id}")]
pub struct HttpStatusError {
    /// The record that was requested
    pub id: PokemonId,
    /// The status code the API answered with
    pub status: u16,
}

impl HttpStatusError {
    /// True when the provider reports the record does not exist
    ///
    /// This is how requests past the end of the dataset surface.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// A whole batch failed because one of its items failed
///
/// No partial results survive: the records that did arrive are dropped
/// together with the batch.
#[derive(Debug, Error)]
#[error("batch of {count} records starting at {start} failed: {source}")]
pub struct BatchFetchError {
    /// First ID of the batch
    pub start: PokemonId,
    /// Number of records the batch asked for
    pub count: usize,
    /// The item failure that aborted the batch
    pub source: Box<Error>,
}

impl BatchFetchError {
    /// The underlying item failure
    pub fn item_error(&self) -> &Error {
        &self.source
    }
}
