//! Operations of the RenderingControl service
//!
//! All of them address instance 0 on the `Master` channel.

use crate::error::{ApiError, Result};
use crate::operation::VieraOperation;
use crate::service::Service;
use crate::xml::element_text;

/// Highest volume the TV accepts
pub const MAX_VOLUME: u8 = 100;

const MASTER_CHANNEL_ARGS: &str = "<InstanceID>0</InstanceID><Channel>Master</Channel>";

/// GetVolume operation
pub struct GetVolumeOperation;

impl VieraOperation for GetVolumeOperation {
    type Request = ();
    type Response = u8;

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "GetVolume";

    fn build_payload(_request: &Self::Request) -> String {
        MASTER_CHANNEL_ARGS.to_string()
    }

    fn parse_response(body: &str) -> Result<Self::Response> {
        let text = element_text(body, "CurrentVolume")?;
        text.parse::<u8>()
            .map_err(|_| ApiError::bad_response(format!("The TV has returned a bad volume value: '{}'", text)))
    }
}

/// SetVolume operation
pub struct SetVolumeOperation;

/// Request for SetVolume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetVolumeRequest {
    pub desired_volume: u8,
}

impl VieraOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = ();

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "SetVolume";

    fn validate(request: &Self::Request) -> Result<()> {
        if request.desired_volume > MAX_VOLUME {
            return Err(ApiError::Usage(format!(
                "Bad value for volume control ({}). It must be between 0 and {}",
                request.desired_volume, MAX_VOLUME
            )));
        }
        Ok(())
    }

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "{}<DesiredVolume>{}</DesiredVolume>",
            MASTER_CHANNEL_ARGS, request.desired_volume
        )
    }

    fn parse_response(_body: &str) -> Result<Self::Response> {
        Ok(())
    }
}

/// GetMute operation
pub struct GetMuteOperation;

impl VieraOperation for GetMuteOperation {
    type Request = ();
    type Response = bool;

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "GetMute";

    fn build_payload(_request: &Self::Request) -> String {
        MASTER_CHANNEL_ARGS.to_string()
    }

    fn parse_response(body: &str) -> Result<Self::Response> {
        element_text(body, "CurrentMute").map(|text| text != "0")
    }
}

/// SetMute operation
pub struct SetMuteOperation;

/// Request for SetMute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetMuteRequest {
    pub desired_mute: bool,
}

impl VieraOperation for SetMuteOperation {
    type Request = SetMuteRequest;
    type Response = ();

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "SetMute";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "{}<DesiredMute>{}</DesiredMute>",
            MASTER_CHANNEL_ARGS,
            if request.desired_mute { "1" } else { "0" }
        )
    }

    fn parse_response(_body: &str) -> Result<Self::Response> {
        Ok(())
    }
}
