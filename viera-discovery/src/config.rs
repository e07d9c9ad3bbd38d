//! Discovery configuration
//!
//! The multicast group and port come from UPnP, the search target and local
//! port from the TV firmware. A [`DiscoveryConfig`] lets a run override them.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::time::Duration;

/// Well-known SSDP multicast group
pub const SSDP_MULTICAST_ADDRESS: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// Well-known SSDP port
pub const SSDP_PORT: u16 = 1900;

/// Local UDP port the discovery socket is bound to
pub const DEFAULT_LOCAL_PORT: u16 = 60000;

/// How long to wait for replies
pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Search target advertised by Viera TVs
pub const VIERA_SEARCH_TARGET: &str = "urn:panasonic-com:device:p00RemoteController:1";

/// Configuration for a single discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Multicast group the M-SEARCH is sent to
    /// Default: 239.255.255.250
    pub multicast_address: Ipv4Addr,

    /// Multicast port
    /// Default: 1900
    pub multicast_port: u16,

    /// Local port to bind
    /// Default: 60000
    pub local_port: u16,

    /// Wall-clock window during which replies are collected
    /// Default: 3 seconds
    pub timeout: Duration,

    /// `ST` header of the probe
    pub search_target: String,

    /// `MX` header of the probe (seconds devices may delay their answer)
    /// Default: 1
    pub max_wait: u32,

    /// Multicast TTL
    /// Default: 2
    pub multicast_ttl: u32,
}

impl DiscoveryConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_local_port(mut self, local_port: u16) -> Self {
        self.local_port = local_port;
        self
    }

    pub fn with_search_target(mut self, search_target: impl Into<String>) -> Self {
        self.search_target = search_target.into();
        self
    }

    /// Destination of the M-SEARCH probe
    pub fn multicast_target(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.multicast_address, self.multicast_port)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            multicast_address: SSDP_MULTICAST_ADDRESS,
            multicast_port: SSDP_PORT,
            local_port: DEFAULT_LOCAL_PORT,
            timeout: DEFAULT_DISCOVERY_TIMEOUT,
            search_target: VIERA_SEARCH_TARGET.to_string(),
            max_wait: 1,
            multicast_ttl: 2,
        }
    }
}
