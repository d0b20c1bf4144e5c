//! Capability source seam
//!
//! Negotiation never talks to hardware. It consumes a
//! [`CapabilitySource`], the collaborator that has already queried the
//! platform and holds the answers as structured data. Capabilities a
//! device may lack are surfaced as `Option`, so "is this operation
//! available" is a plain capability check rather than runtime probing.

use crate::flash::DeviceProfile;
use crate::size::Size;
use crate::zoom::ZoomCapability;

/// Supplies the device capability data negotiation runs over
pub trait CapabilitySource {
    /// Supported preview sizes, in device-reported order
    fn preview_sizes(&self) -> Vec<Size>;

    /// Supported still-picture sizes, in device-reported order
    fn picture_sizes(&self) -> Vec<Size>;

    /// Zoom envelope, or `None` when the device does not support zoom
    fn zoom(&self) -> Option<ZoomCapability>;

    /// Identity used for quirk lookups
    fn device(&self) -> DeviceProfile;
}

/// In-memory capability source
///
/// For tests, the CLI and callers that already hold structured
/// capability data.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilities {
    pub preview_sizes: Vec<Size>,
    pub picture_sizes: Vec<Size>,
    pub zoom: Option<ZoomCapability>,
    pub device: DeviceProfile,
}

impl CapabilitySource for StaticCapabilities {
    fn preview_sizes(&self) -> Vec<Size> {
        self.preview_sizes.clone()
    }

    fn picture_sizes(&self) -> Vec<Size> {
        self.picture_sizes.clone()
    }

    fn zoom(&self) -> Option<ZoomCapability> {
        self.zoom.clone()
    }

    fn device(&self) -> DeviceProfile {
        self.device.clone()
    }
}
