use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for Viera operations
///
/// Every failure falls into one of three kinds: the caller misused the API,
/// the TV could not be reached, or the TV answered with something unusable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller misuse
    ///
    /// Raised before any network I/O: no host configured, volume out of
    /// range, unknown key name.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Network communication error
    ///
    /// The connection was refused, timed out, or the host name did not
    /// resolve.
    #[error("The TV is unreachable: {0}")]
    UnreachableDevice(String),

    /// The TV answered but the answer is not usable
    ///
    /// `status` is set when the TV rejected the command with a non-200 HTTP
    /// status. It is `None` when the body could not be parsed or lacks the
    /// expected element.
    #[error("Bad response from TV: {reason}")]
    BadResponse { status: Option<u16>, reason: String },
}

impl ApiError {
    /// The response body could not be interpreted
    pub fn bad_response(reason: impl Into<String>) -> Self {
        Self::BadResponse {
            status: None,
            reason: reason.into(),
        }
    }

    /// The TV refused the command with the given HTTP status
    pub fn command_rejected(status: u16) -> Self {
        Self::BadResponse {
            status: Some(status),
            reason: format!(
                "This command has failed, maybe the TV does not support it (HTTP {})",
                status
            ),
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    pub fn is_command_rejected(&self) -> bool {
        matches!(self, Self::BadResponse { status: Some(_), .. })
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from SoapError to ApiError
impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Unreachable(msg) => ApiError::UnreachableDevice(msg),
            SoapError::Rejected(status) => ApiError::command_rejected(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_error_conversion() {
        let api_error: ApiError = SoapError::Unreachable("connection refused".to_string()).into();
        assert!(matches!(api_error, ApiError::UnreachableDevice(_)));

        let api_error: ApiError = SoapError::Rejected(500).into();
        assert!(api_error.is_command_rejected());
        assert!(matches!(api_error, ApiError::BadResponse { status: Some(500), .. }));
    }

    #[test]
    fn test_bad_response_is_not_a_rejection() {
        let error = ApiError::bad_response("Missing CurrentVolume element");
        assert!(!error.is_command_rejected());
        assert!(!error.is_usage());
    }

    #[test]
    fn test_error_display() {
        let usage = ApiError::Usage("You must set the host value to use this feature".to_string());
        assert_eq!(
            format!("{}", usage),
            "Usage error: You must set the host value to use this feature"
        );

        let unreachable = ApiError::UnreachableDevice("timed out".to_string());
        assert_eq!(format!("{}", unreachable), "The TV is unreachable: timed out");

        let rejected = ApiError::command_rejected(500);
        assert_eq!(
            format!("{}", rejected),
            "Bad response from TV: This command has failed, maybe the TV does not support it (HTTP 500)"
        );
    }
}
