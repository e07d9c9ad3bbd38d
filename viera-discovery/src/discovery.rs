//! Core discovery logic.
//!
//! A discovery run:
//! 1. Opens a UDP socket on the local discovery port and joins the SSDP group
//! 2. Sends a single M-SEARCH probe for Viera remote controllers
//! 3. Receives replies until the deadline passes
//! 4. Keeps one device per responding address, in arrival order

use std::collections::HashSet;
use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr, UdpSocket};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::DiscoveryConfig;
use crate::device::DiscoveredDevice;
use crate::error::{DiscoveryError, Result};
use crate::ssdp;

const RECV_BUFFER_SIZE: usize = 2048;

/// A discovery run against the local network.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use viera_discovery::{Discovery, DiscoveryConfig};
///
/// let config = DiscoveryConfig::default().with_timeout(Duration::from_secs(5));
/// for tv in Discovery::new(config).run()? {
///     println!("Found TV at {}", tv.address());
/// }
/// # Ok::<(), viera_discovery::DiscoveryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    config: DiscoveryConfig,
}

impl Discovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Probe the network and collect every TV that answers in time
    ///
    /// The socket lives only for the duration of this call and is closed on
    /// every return path.
    pub fn run(&self) -> Result<Vec<DiscoveredDevice>> {
        let socket = ssdp::open_socket(&self.config)?;
        ssdp::send_search(&socket, &self.config)?;

        debug!("Listening for discovery replies");
        collect_replies(&socket, self.config.timeout)
    }
}

/// Receive replies on `socket` until `timeout` has elapsed
///
/// A receive timeout ends the run normally. Any other socket error aborts it.
pub(crate) fn collect_replies(socket: &UdpSocket, timeout: Duration) -> Result<Vec<DiscoveredDevice>> {
    let deadline = Instant::now() + timeout;
    let mut collector = DeviceCollector::default();
    let mut buffer = [0u8; RECV_BUFFER_SIZE];

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }

        socket
            .set_read_timeout(Some(remaining))
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e)))?;

        match socket.recv_from(&mut buffer) {
            Ok((size, from)) => {
                collector.accept(from, &buffer[..size]);
            }
            // The deadline check at the top of the loop ends the run
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {}
            Err(e) => {
                return Err(DiscoveryError::NetworkError(format!("Socket error: {}", e)));
            }
        }
    }

    info!("No more TVs found ({} discovered)", collector.len());
    Ok(collector.into_devices())
}

/// Accumulates replies into devices, one per sender address
#[derive(Debug, Default)]
pub(crate) struct DeviceCollector {
    devices: Vec<DiscoveredDevice>,
    seen: HashSet<IpAddr>,
}

impl DeviceCollector {
    /// Record one datagram. Returns `true` if it produced a new device.
    pub fn accept(&mut self, from: SocketAddr, datagram: &[u8]) -> bool {
        let text = match std::str::from_utf8(datagram) {
            Ok(text) => text,
            Err(_) => {
                debug!("Ignoring non UTF-8 reply from {}", from);
                return false;
            }
        };

        if self.seen.contains(&from.ip()) {
            debug!("Ignoring duplicate reply from {}", from);
            return false;
        }

        let reply = match ssdp::parse_reply(text) {
            Some(reply) => reply,
            None => {
                debug!("Ignoring malformed reply from {}: '''{}'''", from, text);
                return false;
            }
        };

        debug!(
            status = %reply.status_line,
            "Received response from {}: '''{}'''",
            from,
            text
        );

        let device = DiscoveredDevice::new(from.ip(), reply.headers);
        info!("Found TV {}", device.address());

        self.seen.insert(from.ip());
        self.devices.push(device);
        true
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn into_devices(self) -> Vec<DiscoveredDevice> {
        self.devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn reply(uuid: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\n\
             LOCATION: http://tv/nrc/ddd.xml\r\n\
             ST: urn:panasonic-com:device:p00RemoteController:1\r\n\
             USN: uuid:{}::urn:panasonic-com:device:p00RemoteController:1\r\n\
             \r\n",
            uuid
        )
    }

    fn addr(last: u8, port: u16) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::new(192, 168, 1, last), port))
    }

    fn loopback_receiver() -> UdpSocket {
        UdpSocket::bind("127.0.0.1:0").unwrap()
    }

    #[test]
    fn test_collector_two_devices_in_arrival_order() {
        let mut collector = DeviceCollector::default();

        assert!(collector.accept(addr(21, 1900), reply("second-tv").as_bytes()));
        assert!(collector.accept(addr(20, 1900), reply("first-tv").as_bytes()));

        let devices = collector.into_devices();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].address(), IpAddr::from([192, 168, 1, 21]));
        assert_eq!(devices[1].address(), IpAddr::from([192, 168, 1, 20]));
        assert_ne!(devices[0].address(), devices[1].address());
        assert!(devices[0].usn().unwrap().contains("second-tv"));
    }

    #[test]
    fn test_collector_deduplicates_by_address() {
        let mut collector = DeviceCollector::default();

        assert!(collector.accept(addr(20, 1900), reply("tv").as_bytes()));
        assert!(!collector.accept(addr(20, 1901), reply("tv").as_bytes()));

        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_collector_ignores_invalid_datagrams() {
        let mut collector = DeviceCollector::default();

        assert!(!collector.accept(addr(20, 1900), &[0xff, 0xfe, 0x00]));
        assert!(!collector.accept(addr(21, 1900), b"no line break"));
        // A bad datagram does not block a later valid reply from that host
        assert!(collector.accept(addr(21, 1900), reply("tv").as_bytes()));

        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_collect_replies_empty_after_timeout() {
        let socket = loopback_receiver();
        let timeout = Duration::from_millis(200);

        let started = Instant::now();
        let devices = collect_replies(&socket, timeout).unwrap();

        assert!(devices.is_empty());
        assert!(started.elapsed() >= timeout);
    }

    #[test]
    fn test_collect_replies_over_loopback() {
        let receiver = loopback_receiver();
        let target = receiver.local_addr().unwrap();

        let tv = UdpSocket::bind("127.0.0.1:0").unwrap();
        tv.send_to(reply("loopback-tv").as_bytes(), target).unwrap();
        tv.send_to(reply("loopback-tv").as_bytes(), target).unwrap();

        let devices = collect_replies(&receiver, Duration::from_millis(300)).unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].address(), IpAddr::from([127, 0, 0, 1]));
        assert_eq!(devices[0].location(), Some("http://tv/nrc/ddd.xml"));
    }

    #[test]
    fn test_collect_replies_two_senders_in_arrival_order() {
        let receiver = loopback_receiver();
        let target = receiver.local_addr().unwrap();

        let second_tv = UdpSocket::bind("127.0.0.2:0").unwrap();
        let first_tv = UdpSocket::bind("127.0.0.1:0").unwrap();
        second_tv.send_to(reply("second-tv").as_bytes(), target).unwrap();
        first_tv.send_to(reply("first-tv").as_bytes(), target).unwrap();

        let devices = collect_replies(&receiver, Duration::from_millis(300)).unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].address(), IpAddr::from([127, 0, 0, 2]));
        assert_eq!(devices[1].address(), IpAddr::from([127, 0, 0, 1]));
        assert!(devices[0].usn().unwrap().contains("second-tv"));
        assert!(devices[1].usn().unwrap().contains("first-tv"));
    }

    #[test]
    fn test_collect_replies_zero_timeout() {
        let socket = loopback_receiver();
        let devices = collect_replies(&socket, Duration::ZERO).unwrap();
        assert!(devices.is_empty());
    }
}
