//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// The device could not be reached (refused connection, timeout, DNS failure)
    #[error("Device unreachable: {0}")]
    Unreachable(String),

    /// The device answered with a non-200 HTTP status
    #[error("Command rejected: HTTP status {0}")]
    Rejected(u16),
}
