//! Viera TV discovery library
//!
//! This crate finds Panasonic Viera televisions on the local network using
//! SSDP (Simple Service Discovery Protocol). A single M-SEARCH probe is sent
//! to the multicast group and every reply received before the timeout is
//! returned, with its headers, as a [`DiscoveredDevice`].
//!
//! # Quick Start
//!
//! ```no_run
//! use viera_discovery::discover;
//!
//! for tv in discover()? {
//!     println!("Found TV at {} ({:?})", tv.address(), tv.location());
//! }
//! # Ok::<(), viera_discovery::DiscoveryError>(())
//! ```
//!
//! Finding nothing is not an error: the result is simply empty. Only socket
//! failures (no network, multicast unavailable) are reported.

mod config;
mod device;
mod discovery;
mod error;
mod ssdp;

pub use config::{
    DiscoveryConfig, DEFAULT_DISCOVERY_TIMEOUT, DEFAULT_LOCAL_PORT, SSDP_MULTICAST_ADDRESS,
    SSDP_PORT, VIERA_SEARCH_TARGET,
};
pub use device::DiscoveredDevice;
pub use discovery::Discovery;
pub use error::{DiscoveryError, Result};

use std::time::Duration;

/// Discover Viera TVs on the local network with the default 3-second timeout.
pub fn discover() -> Result<Vec<DiscoveredDevice>> {
    Discovery::default().run()
}

/// Discover Viera TVs on the local network with a custom timeout.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use viera_discovery::discover_with_timeout;
///
/// let tvs = discover_with_timeout(Duration::from_secs(5))?;
/// println!("{} TV(s) found", tvs.len());
/// # Ok::<(), viera_discovery::DiscoveryError>(())
/// ```
pub fn discover_with_timeout(timeout: Duration) -> Result<Vec<DiscoveredDevice>> {
    Discovery::new(DiscoveryConfig::default().with_timeout(timeout)).run()
}
