//! Best-fit capture parameter selection for camera scanning pipelines
//!
//! Camera devices report what they support as small discrete lists:
//! preview and picture sizes, zoom bounds and stops, vendor flash
//! values. This crate picks the concrete parameters that best
//! approximate a caller's request (nearest size by area or aspect
//! ratio, zoom clamped and snapped into the device envelope,
//! quirk-aware flash) without ever touching a device. Acquiring the
//! capability data and applying the chosen parameters stay with the
//! platform layer.

pub mod capability;
pub mod error;
pub mod flash;
pub mod negotiator;
pub mod selector;
pub mod size;
pub mod zoom;

// Re-export main types
pub use capability::{CapabilitySource, StaticCapabilities};
pub use error::{Error, Result};
pub use flash::{DeviceProfile, FlashMode, FlashQuirk, FlashQuirks, FlashSetting};
pub use negotiator::{NegotiatedParameters, Negotiator, NegotiatorConfig};
pub use selector::{best_by_area, best_by_aspect, closest_by_dimensions, Target, ASPECT_TOLERANCE};
pub use size::Size;
pub use zoom::{ZoomCapability, ZoomFactor, DEFAULT_DESIRED_ZOOM};

#[cfg(test)]
mod proptest_selector;
