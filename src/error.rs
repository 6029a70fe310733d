//! Lookup error type. `Display` is the message shown in place of the result.

use crate::constants::NOT_FOUND_MESSAGE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    /// The API answered with a non-success status
    #[error("{msg}", msg = NOT_FOUND_MESSAGE)]
    NotFound { status: reqwest::StatusCode },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Could not read the dictionary response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid dictionary URL: {0}")]
    InvalidUrl(String),
}
