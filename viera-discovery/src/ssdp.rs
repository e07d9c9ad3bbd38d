//! SSDP (Simple Service Discovery Protocol) wire handling
//!
//! This module builds the M-SEARCH probe, prepares the multicast socket and
//! parses replies. It is not part of the public API.

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

use socket2::{Domain, Protocol, Socket, Type};
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, Result};

/// A parsed SSDP reply
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpReply {
    pub status_line: String,
    pub headers: HashMap<String, String>,
}

/// Build the M-SEARCH request for the given configuration
pub(crate) fn build_search_request(config: &DiscoveryConfig) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         ST: {}\r\n\
         MX: {}\r\n\
         \r\n",
        config.multicast_target(),
        config.search_target,
        config.max_wait
    )
}

/// Open the UDP socket used for one discovery run
///
/// The socket is bound to the configured local port on all interfaces and
/// joined to the multicast group.
pub(crate) fn open_socket(config: &DiscoveryConfig) -> Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to create UDP socket: {}", e)))?;

    socket
        .set_reuse_address(true)
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set SO_REUSEADDR: {}", e)))?;

    let bind_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.local_port));
    socket
        .bind(&bind_addr.into())
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket to {}: {}", bind_addr, e)))?;

    let socket: UdpSocket = socket.into();

    socket
        .join_multicast_v4(&config.multicast_address, &Ipv4Addr::UNSPECIFIED)
        .map_err(|e| {
            DiscoveryError::NetworkError(format!(
                "Failed to join multicast group {}: {}",
                config.multicast_address, e
            ))
        })?;

    socket
        .set_multicast_ttl_v4(config.multicast_ttl)
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast TTL: {}", e)))?;

    socket
        .set_multicast_loop_v4(true)
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

    debug!("UDP multicast socket ready on {}", bind_addr);

    Ok(socket)
}

/// Send the M-SEARCH probe to the multicast group
pub(crate) fn send_search(socket: &UdpSocket, config: &DiscoveryConfig) -> Result<()> {
    let request = build_search_request(config);

    debug!("Sending multicast discovery request: '''{}'''", request);
    socket
        .send_to(request.as_bytes(), config.multicast_target())
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

    Ok(())
}

/// Parse an SSDP reply
///
/// The text is split at the first CRLF into the status line and the header
/// block. Returns `None` when there is no CRLF at all.
pub(crate) fn parse_reply(text: &str) -> Option<SsdpReply> {
    let (status_line, head) = text.split_once("\r\n")?;

    Some(SsdpReply {
        status_line: status_line.trim().to_string(),
        headers: parse_headers(head),
    })
}

/// Parse `Name: value` lines into a map
///
/// Names keep their case. Lines without a colon are skipped and the last
/// occurrence of a repeated header wins.
fn parse_headers(head: &str) -> HashMap<String, String> {
    head.lines()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}
