use soap_client::{SoapAction, SoapClient};
use tracing::{debug, info};

use crate::endpoint::DeviceEndpoint;
use crate::error::Result;
use crate::key::Key;
use crate::operation::VieraOperation;
use crate::operations::{
    GetMuteOperation, GetVolumeOperation, SendKeyOperation, SendKeyRequest, SetMuteOperation,
    SetMuteRequest, SetVolumeOperation, SetVolumeRequest,
};

/// A remote control bound to one TV
///
/// Every call is a single blocking request/response exchange bounded by the
/// endpoint timeout. Nothing is retried. Clones share no mutable state, so
/// one instance per thread is fine.
///
/// # Example
///
/// ```no_run
/// use viera_api::{DeviceEndpoint, Key, RemoteControl};
///
/// let tv = RemoteControl::new(DeviceEndpoint::new("192.168.1.2"));
/// tv.send_key(Key::Apps)?;
/// tv.set_volume(30)?;
/// println!("volume is now {}", tv.get_volume()?);
/// # Ok::<(), viera_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RemoteControl {
    endpoint: DeviceEndpoint,
    soap_client: SoapClient,
}

impl RemoteControl {
    pub fn new(endpoint: DeviceEndpoint) -> Self {
        let soap_client = SoapClient::new(endpoint.timeout());
        Self {
            endpoint,
            soap_client,
        }
    }

    /// Shorthand for `RemoteControl::new(DeviceEndpoint::new(host))`
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new(DeviceEndpoint::new(host))
    }

    pub fn endpoint(&self) -> &DeviceEndpoint {
        &self.endpoint
    }

    /// Send one SOAP request to the TV and return the raw response body
    ///
    /// `url_path` is the control endpoint (`dmr/control_0` or
    /// `nrc/control_0`), `urn` the service type without the `urn:` prefix and
    /// `params` the XML argument fragment.
    pub fn soap_request(&self, url_path: &str, urn: &str, action: &str, params: &str) -> Result<String> {
        let host = self.endpoint.require_host()?;
        let action = SoapAction::new(url_path, urn, action, params);

        let response = self.soap_client.call(host, self.endpoint.port(), &action)?;
        Ok(response.body)
    }

    /// Execute a Viera operation against the TV
    ///
    /// The host and the request are checked before anything is sent.
    pub fn execute<Op: VieraOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        self.endpoint.require_host()?;
        Op::validate(request)?;

        let service_info = Op::SERVICE.info();
        let payload = Op::build_payload(request);

        debug!(
            host = %self.endpoint.host(),
            service = Op::SERVICE.name(),
            "Executing {}",
            Op::ACTION
        );

        let body = self.soap_request(service_info.endpoint, service_info.urn, Op::ACTION, &payload)?;
        Op::parse_response(&body)
    }

    /// Send a key press
    ///
    /// Accepts a [`Key`] or any raw key code string.
    pub fn send_key(&self, key: impl AsRef<str>) -> Result<()> {
        let key = key.as_ref();
        info!("Send Key {} to {}", key, self.endpoint.host());
        self.execute::<SendKeyOperation>(&SendKeyRequest {
            key: key.to_string(),
        })
    }

    /// Current volume level (0-100)
    pub fn get_volume(&self) -> Result<u8> {
        info!("Send GetVolume request to {}", self.endpoint.host());
        self.execute::<GetVolumeOperation>(&())
    }

    /// Set the volume level
    ///
    /// Values above 100 are refused with a usage error before any request.
    pub fn set_volume(&self, volume: u8) -> Result<()> {
        info!("Send SetVolume({}) request to {}", volume, self.endpoint.host());
        self.execute::<SetVolumeOperation>(&SetVolumeRequest {
            desired_volume: volume,
        })
    }

    /// Whether the TV is muted
    pub fn get_mute(&self) -> Result<bool> {
        info!("Send GetMute request to {}", self.endpoint.host());
        self.execute::<GetMuteOperation>(&())
    }

    /// Mute or unmute the TV
    pub fn set_mute(&self, enable: bool) -> Result<()> {
        info!("Send SetMute({}) request to {}", enable, self.endpoint.host());
        self.execute::<SetMuteOperation>(&SetMuteRequest {
            desired_mute: enable,
        })
    }

    /// Press the volume up key once
    pub fn volume_up(&self) -> Result<()> {
        self.send_key(Key::VolumeUp)
    }

    /// Press the volume down key once
    pub fn volume_down(&self) -> Result<()> {
        self.send_key(Key::VolumeDown)
    }

    /// Press the mute key, flipping the mute state
    pub fn toggle_mute(&self) -> Result<()> {
        self.send_key(Key::Mute)
    }

    /// Press the power key
    pub fn power(&self) -> Result<()> {
        self.send_key(Key::Power)
    }
}

impl From<DeviceEndpoint> for RemoteControl {
    fn from(endpoint: DeviceEndpoint) -> Self {
        Self::new(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_remote_control_creation() {
        let tv = RemoteControl::with_host("192.168.1.2");
        assert_eq!(tv.endpoint().host(), "192.168.1.2");
        assert_eq!(tv.endpoint().port(), 55000);
    }

    #[test]
    fn test_no_host_fails_fast_for_every_operation() {
        let tv = RemoteControl::new(DeviceEndpoint::default());

        assert!(matches!(tv.send_key(Key::Power), Err(ApiError::Usage(_))));
        assert!(matches!(tv.send_key("anything"), Err(ApiError::Usage(_))));
        assert!(matches!(tv.get_volume(), Err(ApiError::Usage(_))));
        assert!(matches!(tv.set_volume(10), Err(ApiError::Usage(_))));
        assert!(matches!(tv.get_mute(), Err(ApiError::Usage(_))));
        assert!(matches!(tv.set_mute(true), Err(ApiError::Usage(_))));
        assert!(matches!(tv.power(), Err(ApiError::Usage(_))));
        assert!(matches!(
            tv.soap_request("dmr/control_0", "x", "GetVolume", ""),
            Err(ApiError::Usage(_))
        ));
    }
}
