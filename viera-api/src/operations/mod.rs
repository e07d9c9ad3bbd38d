//! Viera API operations organized by service

pub mod network_control;
pub mod rendering_control;

pub use network_control::{SendKeyOperation, SendKeyRequest};
pub use rendering_control::{
    GetMuteOperation, GetVolumeOperation, SetMuteOperation, SetMuteRequest, SetVolumeOperation,
    SetVolumeRequest, MAX_VOLUME,
};
