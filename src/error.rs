//! Fetch Errors
//!
//! Every variant is a fetch failure; the variant only sharpens the log line.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode {resource} payload: {message}")]
    Decode { resource: &'static str, message: String },
}

impl FetchError {
    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        FetchError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(resource: &'static str, err: impl std::fmt::Display) -> Self {
        FetchError::Decode {
            resource,
            message: err.to_string(),
        }
    }
}
