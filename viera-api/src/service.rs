/// The UPnP services exposed by Viera TVs
///
/// Each service is reached through its own control endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// RenderingControl service on the Digital Media Renderer (volume, mute)
    RenderingControl,

    /// Panasonic Network Remote Control service (key presses)
    NetworkControl,
}

/// Contains the endpoint and service URN for a UPnP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// URL path of the control endpoint, relative to the device root
    pub endpoint: &'static str,

    /// Service type, without the leading `urn:`
    pub urn: &'static str,
}

impl Service {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            Service::RenderingControl => "RenderingControl",
            Service::NetworkControl => "NetworkControl",
        }
    }

    /// Get the service information (endpoint and URN) for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::RenderingControl => ServiceInfo {
                endpoint: "dmr/control_0",
                urn: "schemas-upnp-org:service:RenderingControl:1",
            },
            Service::NetworkControl => ServiceInfo {
                endpoint: "nrc/control_0",
                urn: "panasonic-com:service:p00NetworkControl:1",
            },
        }
    }
}
