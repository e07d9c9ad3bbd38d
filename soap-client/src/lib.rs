//! Private SOAP client for Viera TV communication
//!
//! This crate provides a minimal SOAP 1.1 client for the two control
//! endpoints exposed by Panasonic Viera televisions. It builds the envelope,
//! POSTs it and hands the raw XML body back to the caller; interpreting the
//! body is left to the higher-level API crate.

mod error;

pub use error::SoapError;

use std::time::Duration;
use tracing::{debug, warn};

/// Namespace of the SOAP 1.1 envelope
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.1 encoding style
pub const SOAP_ENCODING_NS: &str = "http://schemas.xmlsoap.org/soap/encoding/";

/// Convenience Result type alias for SOAP operations
pub type Result<T> = std::result::Result<T, SoapError>;

/// A single SOAP action invocation
///
/// `urn` is given without the `urn:` scheme prefix, e.g.
/// `schemas-upnp-org:service:RenderingControl:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapAction {
    /// URL path segment of the control endpoint, e.g. `dmr/control_0`
    pub url_path: String,
    /// Service type the action belongs to
    pub urn: String,
    /// Action name, e.g. `SetVolume`
    pub action: String,
    /// XML fragment with the action arguments
    pub params: String,
}

impl SoapAction {
    pub fn new(
        url_path: impl Into<String>,
        urn: impl Into<String>,
        action: impl Into<String>,
        params: impl Into<String>,
    ) -> Self {
        Self {
            url_path: url_path.into(),
            urn: urn.into(),
            action: action.into(),
            params: params.into(),
        }
    }

    /// Build the complete SOAP envelope for this action
    pub fn envelope(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?>"#,
                r#"<s:Envelope xmlns:s="{envelope_ns}" s:encodingStyle="{encoding_ns}">"#,
                "<s:Body>",
                r#"<m:{action} xmlns:m="urn:{urn}">"#,
                "{params}",
                "</m:{action}>",
                "</s:Body>",
                "</s:Envelope>"
            ),
            envelope_ns = SOAP_ENVELOPE_NS,
            encoding_ns = SOAP_ENCODING_NS,
            action = self.action,
            urn = self.urn,
            params = self.params,
        )
    }

    /// Value of the `SOAPAction` header, quotes included
    pub fn soap_action_header(&self) -> String {
        format!("\"urn:{}#{}\"", self.urn, self.action)
    }

    /// Full URL of the control endpoint on the given device
    pub fn url(&self, host: &str, port: u16) -> String {
        format!("http://{}:{}/{}", host, port, self.url_path)
    }
}

/// Successful response from the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    /// HTTP status code (always 200 for responses returned by [`SoapClient::call`])
    pub status: u16,
    /// Raw XML body
    pub body: String,
}

/// A minimal blocking SOAP client
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
}

impl SoapClient {
    /// Create a new SOAP client whose calls are bounded by `timeout`
    ///
    /// Connections are not pooled: each call opens its own connection and
    /// closes it once the response is read.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .max_idle_connections(0)
            .max_idle_connections_per_host(0)
            .build();

        Self { agent }
    }

    /// Send a SOAP request and return the raw response body
    ///
    /// Only an HTTP 200 answer counts as success. Any other status means the
    /// device understood the connection but refused the command.
    pub fn call(&self, host: &str, port: u16, action: &SoapAction) -> Result<SoapResponse> {
        let body = action.envelope();
        let url = action.url(host, port);

        debug!(
            url = %url,
            soap_action = %action.soap_action_header(),
            "Sending SOAP request: '''{}'''",
            body
        );

        let result = self
            .agent
            .post(&url)
            .set("Host", &format!("{}:{}", host, port))
            .set("Content-Length", &body.len().to_string())
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .set("SOAPAction", &action.soap_action_header())
            .send_string(&body);

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                warn!(url = %url, status = code, "Device rejected {}", action.action);
                return Err(SoapError::Rejected(code));
            }
            Err(e) => {
                warn!(url = %url, "Device unreachable: {}", e);
                return Err(SoapError::Unreachable(e.to_string()));
            }
        };

        let status = response.status();
        if status != 200 {
            warn!(url = %url, status, "Device rejected {}", action.action);
            return Err(SoapError::Rejected(status));
        }

        let body = response
            .into_string()
            .map_err(|e| SoapError::Unreachable(format!("Failed to read response body: {}", e)))?;

        debug!("Received response: '''{}'''", body);

        Ok(SoapResponse { status, body })
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_volume_action() -> SoapAction {
        SoapAction::new(
            "dmr/control_0",
            "schemas-upnp-org:service:RenderingControl:1",
            "SetVolume",
            "<InstanceID>0</InstanceID><Channel>Master</Channel><DesiredVolume>20</DesiredVolume>",
        )
    }

    #[test]
    fn test_envelope_structure() {
        let envelope = set_volume_action().envelope();

        assert!(envelope.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(envelope.contains(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">"#
        ));
        assert!(envelope.contains(
            r#"<s:Body><m:SetVolume xmlns:m="urn:schemas-upnp-org:service:RenderingControl:1"><InstanceID>0</InstanceID><Channel>Master</Channel><DesiredVolume>20</DesiredVolume></m:SetVolume></s:Body>"#
        ));
        assert!(envelope.ends_with("</s:Body></s:Envelope>"));
    }

    #[test]
    fn test_envelope_is_well_formed_and_namespaced() {
        let envelope = set_volume_action().envelope();
        let root = xmltree::Element::parse(envelope.as_bytes()).unwrap();

        assert_eq!(root.name, "Envelope");
        let body = root.get_child("Body").unwrap();
        let action = body.get_child("SetVolume").unwrap();
        assert_eq!(
            action.namespace.as_deref(),
            Some("urn:schemas-upnp-org:service:RenderingControl:1")
        );
        let desired = action.get_child("DesiredVolume").unwrap();
        assert_eq!(desired.get_text().unwrap(), "20");
    }

    #[test]
    fn test_soap_action_header() {
        assert_eq!(
            set_volume_action().soap_action_header(),
            "\"urn:schemas-upnp-org:service:RenderingControl:1#SetVolume\""
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            set_volume_action().url("192.168.1.2", 55000),
            "http://192.168.1.2:55000/dmr/control_0"
        );
    }

    #[test]
    fn test_soap_client_creation() {
        let _client = SoapClient::new(Duration::from_millis(500));
        let _default_client = SoapClient::default();
    }
}
