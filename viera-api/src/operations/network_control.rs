//! Operations of the Panasonic NetworkControl service

use quick_xml::escape::escape;

use crate::error::Result;
use crate::operation::VieraOperation;
use crate::service::Service;

/// X_SendKey operation, emulates a press on the remote
pub struct SendKeyOperation;

/// Request for X_SendKey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendKeyRequest {
    /// Key code, e.g. `NRC_MUTE-ONOFF`
    pub key: String,
}

impl VieraOperation for SendKeyOperation {
    type Request = SendKeyRequest;
    type Response = ();

    const SERVICE: Service = Service::NetworkControl;
    const ACTION: &'static str = "X_SendKey";

    fn build_payload(request: &Self::Request) -> String {
        format!("<X_KeyEvent>{}</X_KeyEvent>", escape(request.key.as_str()))
    }

    fn parse_response(_body: &str) -> Result<Self::Response> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let request = SendKeyRequest {
            key: "NRC_POWER-ONOFF".to_string(),
        };
        assert_eq!(
            SendKeyOperation::build_payload(&request),
            "<X_KeyEvent>NRC_POWER-ONOFF</X_KeyEvent>"
        );
    }

    #[test]
    fn test_payload_escapes_markup() {
        let request = SendKeyRequest {
            key: "</X_KeyEvent><evil/>".to_string(),
        };
        assert_eq!(
            SendKeyOperation::build_payload(&request),
            "<X_KeyEvent>&lt;/X_KeyEvent&gt;&lt;evil/&gt;</X_KeyEvent>"
        );
    }

    #[test]
    fn test_response_is_ignored() {
        assert!(SendKeyOperation::parse_response("").is_ok());
    }
}
