//! Devices found during discovery.

use std::collections::HashMap;
use std::net::IpAddr;

use serde::Serialize;

use crate::ssdp::parse_reply;

/// A TV that answered the discovery probe.
///
/// Holds the sender's IP address and every header of its SSDP reply. Header
/// names are matched case-sensitively, as sent by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredDevice {
    address: IpAddr,
    headers: HashMap<String, String>,
}

impl DiscoveredDevice {
    pub fn new(address: IpAddr, headers: HashMap<String, String>) -> Self {
        Self { address, headers }
    }

    /// Build a device from the raw text of an SSDP reply.
    ///
    /// Returns `None` if the reply has no line break separating the status
    /// line from the headers.
    pub fn from_reply(address: IpAddr, reply: &str) -> Option<Self> {
        let reply = parse_reply(reply)?;
        Some(Self::new(address, reply.headers))
    }

    /// IP address the reply came from
    pub fn address(&self) -> IpAddr {
        self.address
    }

    /// All headers of the discovery reply
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a header by its exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// `LOCATION` header, the URL of the device description
    pub fn location(&self) -> Option<&str> {
        self.header("LOCATION")
    }

    /// `SERVER` header
    pub fn server(&self) -> Option<&str> {
        self.header("SERVER")
    }

    /// `USN` header, the unique service name
    pub fn usn(&self) -> Option<&str> {
        self.header("USN")
    }
}
