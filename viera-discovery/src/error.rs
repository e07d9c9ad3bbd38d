//! Error types for the discovery system.

use std::fmt;

/// Error type for discovery operations.
///
/// A receive timeout is not an error: it is how a discovery run ends. Only
/// socket-level failures are reported.
#[derive(Debug)]
pub enum DiscoveryError {
    /// Network-related errors (socket creation, multicast membership, send/receive)
    NetworkError(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// Convenience Result type alias for discovery operations.
///
/// Equivalent to `std::result::Result<T, DiscoveryError>`.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
