use crate::error::Result;
use crate::service::Service;

/// Base trait for all Viera operations
///
/// An operation names its service and action, turns a typed request into the
/// XML argument fragment, and interprets the raw response body. Validation
/// runs before anything is sent, so a failing `validate` means no network I/O.
pub trait VieraOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response;

    /// The UPnP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Check the request before it is sent
    fn validate(_request: &Self::Request) -> Result<()> {
        Ok(())
    }

    /// Build the XML argument fragment that goes inside the action element
    fn build_payload(request: &Self::Request) -> String;

    /// Interpret the raw XML body of a successful response
    fn parse_response(body: &str) -> Result<Self::Response>;
}
