// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Server answered, but outside the 2xx range
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },
    /// No response received (DNS, refused, reset, timeout)
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to decode response body: {0}")]
    Decode(String),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status carried by a `Request` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
