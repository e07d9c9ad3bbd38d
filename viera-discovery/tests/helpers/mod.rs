//! Test helpers for building SSDP replies as Viera TVs send them

use std::net::IpAddr;

/// A fake TV answering the discovery probe
#[derive(Debug, Clone)]
pub struct TvFixture {
    pub ip: IpAddr,
    pub uuid: String,
}

impl TvFixture {
    pub fn new(ip: &str, uuid: &str) -> Self {
        Self {
            ip: ip.parse().expect("valid fixture IP"),
            uuid: uuid.to_string(),
        }
    }

    /// URL of the remote controller description
    pub fn location_url(&self) -> String {
        format!("http://{}:55000/nrc/ddd.xml", self.ip)
    }

    /// SSDP reply as sent by the TV
    pub fn ssdp_response(&self) -> String {
        format!(
            "HTTP/1.1 200 OK\r\n\
             CACHE-CONTROL: max-age=1800\r\n\
             EXT:\r\n\
             LOCATION: {}\r\n\
             SERVER: Linux/2.6 UPnP/1.0 Panasonic-UPnP-MW/1.0\r\n\
             ST: urn:panasonic-com:device:p00RemoteController:1\r\n\
             USN: uuid:{}::urn:panasonic-com:device:p00RemoteController:1\r\n\
             \r\n",
            self.location_url(),
            self.uuid
        )
    }
}
