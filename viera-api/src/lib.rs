//! Remote control API for Panasonic Viera TVs
//!
//! This crate drives a TV through the vendor's UPnP/SOAP control endpoints:
//! key presses go to the Network Remote Control service, volume and mute to
//! the RenderingControl service of the Digital Media Renderer. Low-level
//! SOAP communication is delegated to the private `soap-client` crate and
//! TVs can be located with `viera-discovery`.
//!
//! ```no_run
//! use viera_api::{discover, DeviceEndpoint, Key, RemoteControl};
//!
//! let tv = match discover()?.first() {
//!     Some(device) => RemoteControl::new(DeviceEndpoint::from(device)),
//!     None => RemoteControl::with_host("192.168.1.2"),
//! };
//!
//! tv.send_key(Key::Home)?;
//! if !tv.get_mute()? {
//!     tv.set_volume(15)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod key;
pub mod logging;
pub mod operation;
pub mod operations;
pub mod service;
pub mod xml;

pub use client::RemoteControl;
pub use endpoint::{DeviceEndpoint, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use key::Key;
pub use operation::VieraOperation;
pub use service::{Service, ServiceInfo};

pub use viera_discovery::{
    discover, discover_with_timeout, DiscoveredDevice, Discovery, DiscoveryConfig, DiscoveryError,
};
