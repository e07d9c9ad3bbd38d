//! Device endpoint configuration

use std::net::IpAddr;
use std::time::Duration;

use viera_discovery::DiscoveredDevice;

use crate::error::{ApiError, Result};

/// Port of the TV control endpoints
pub const DEFAULT_PORT: u16 = 55000;

/// Timeout applied to each SOAP call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Where and how to reach a TV
///
/// Immutable once built. The default value has no host, which makes every
/// operation fail with [`ApiError::Usage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    host: String,
    port: u16,
    timeout: Duration,
}

impl DeviceEndpoint {
    /// Endpoint for `host` with the default port and timeout
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_host(&self) -> bool {
        !self.host.trim().is_empty()
    }

    /// The host, or a usage error if none is configured
    pub(crate) fn require_host(&self) -> Result<&str> {
        if self.has_host() {
            Ok(&self.host)
        } else {
            Err(ApiError::Usage(
                "You must set the host value to use this feature".to_string(),
            ))
        }
    }
}

impl Default for DeviceEndpoint {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl From<IpAddr> for DeviceEndpoint {
    fn from(address: IpAddr) -> Self {
        match address {
            IpAddr::V4(v4) => Self::new(v4.to_string()),
            IpAddr::V6(v6) => Self::new(format!("[{}]", v6)),
        }
    }
}

impl From<&DiscoveredDevice> for DeviceEndpoint {
    fn from(device: &DiscoveredDevice) -> Self {
        Self::from(device.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let endpoint = DeviceEndpoint::new("192.168.1.2");
        assert_eq!(endpoint.host(), "192.168.1.2");
        assert_eq!(endpoint.port(), 55000);
        assert_eq!(endpoint.timeout(), Duration::from_secs(2));
        assert!(endpoint.has_host());
    }

    #[test]
    fn test_builders() {
        let endpoint = DeviceEndpoint::new("tv.local")
            .with_port(8080)
            .with_timeout(Duration::from_millis(300));

        assert_eq!(endpoint.port(), 8080);
        assert_eq!(endpoint.timeout(), Duration::from_millis(300));
    }

    #[test]
    fn test_missing_host_is_usage_error() {
        assert!(matches!(
            DeviceEndpoint::default().require_host(),
            Err(ApiError::Usage(_))
        ));
        assert!(matches!(
            DeviceEndpoint::new("   ").require_host(),
            Err(ApiError::Usage(_))
        ));
        assert_eq!(DeviceEndpoint::new("10.0.0.1").require_host().unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_from_discovered_device() {
        let device = DiscoveredDevice::new("192.168.1.20".parse().unwrap(), HashMap::new());
        let endpoint = DeviceEndpoint::from(&device);

        assert_eq!(endpoint.host(), "192.168.1.20");
        assert_eq!(endpoint.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_from_ipv6_address_is_bracketed() {
        let endpoint = DeviceEndpoint::from("fe80::1".parse::<IpAddr>().unwrap());
        assert_eq!(endpoint.host(), "[fe80::1]");
    }
}
