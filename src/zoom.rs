//! Zoom negotiation
//!
//! Devices express zoom limits in tenths of 1x magnification, and some
//! only support a fixed list of stops or a coarse step. Negotiation
//! clamps a desired factor into the advertised envelope; whether the
//! device supports zoom at all is the capability source's call (an
//! absent [`ZoomCapability`]).

use std::fmt;

/// Zoom magnification in tenths of 1x, the granularity devices
/// advertise; `ZoomFactor(27)` is 2.7x
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoomFactor(pub u32);

impl ZoomFactor {
    pub const fn tenths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.as_f64())
    }
}

/// Default desired zoom for scanning; a slight zoom-in encourages the
/// user to hold the code further from the lens
pub const DEFAULT_DESIRED_ZOOM: ZoomFactor = ZoomFactor(27);

/// Zoom envelope advertised by a device
///
/// Every field is optional or possibly empty; a device that supports
/// zoom but reports none of these takes the desired factor unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomCapability {
    /// Maximum preview zoom
    pub max: Option<ZoomFactor>,
    /// Maximum zoom while capturing a still picture
    pub picture_max: Option<ZoomFactor>,
    /// Step granularity the zoom control moves in
    pub step: Option<ZoomFactor>,
    /// Discrete stops, for devices that only support fixed values
    pub discrete: Vec<ZoomFactor>,
}

/// Fit a desired zoom factor into a device's advertised envelope
///
/// Clamps to both maxima, then moves to the nearest discrete stop when
/// the device lists any, then rounds down to a multiple of the step
/// when it is coarser than one tenth. The order matters: stops are
/// taken from the clamped value, and step rounding applies last.
pub fn negotiate(desired: ZoomFactor, capability: &ZoomCapability) -> ZoomFactor {
    let mut zoom = desired;

    if let Some(max) = capability.max {
        zoom = zoom.min(max);
    }
    if let Some(max) = capability.picture_max {
        zoom = zoom.min(max);
    }

    if !capability.discrete.is_empty() {
        zoom = nearest_stop(zoom, &capability.discrete);
    }

    if let Some(step) = capability.step {
        if step.0 > 1 {
            zoom = ZoomFactor(zoom.0 - zoom.0 % step.0);
        }
    }

    zoom
}

/// Nearest discrete stop; ties keep the first in list order
fn nearest_stop(desired: ZoomFactor, stops: &[ZoomFactor]) -> ZoomFactor {
    let mut best = stops[0];
    for &stop in &stops[1..] {
        if desired.0.abs_diff(stop.0) < desired.0.abs_diff(best.0) {
            best = stop;
        }
    }
    best
}
