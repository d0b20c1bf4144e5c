//! Capture parameter negotiation
//!
//! Ties the individual selectors together: given a capability source
//! and the screen-derived target, produce the preview size, picture
//! size, zoom factor and flash setting a capture pipeline should be
//! configured with.

use crate::capability::CapabilitySource;
use crate::error::Result;
use crate::flash::{FlashQuirks, FlashSetting};
use crate::selector::{best_by_area, Target};
use crate::size::Size;
use crate::zoom::{self, ZoomFactor, DEFAULT_DESIRED_ZOOM};
use log::{debug, warn};

/// Parameters chosen for a device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedParameters {
    pub preview_size: Size,
    pub picture_size: Size,
    /// `None` when the device does not support zoom
    pub zoom: Option<ZoomFactor>,
    pub flash: FlashSetting,
}

/// Negotiation settings
///
/// # Example
/// ```
/// use camfit::{NegotiatorConfig, ZoomFactor};
///
/// let config = NegotiatorConfig::new()
///     .desired_zoom(ZoomFactor(15))
///     .normalize_orientation(false);
/// ```
#[derive(Debug, Clone)]
pub struct NegotiatorConfig {
    desired_zoom: ZoomFactor,
    flash_quirks: FlashQuirks,
    normalize_orientation: bool,
}

impl NegotiatorConfig {
    /// Defaults: 2.7x desired zoom, the built-in flash quirk table, and
    /// portrait targets normalized to landscape
    pub fn new() -> Self {
        Self {
            desired_zoom: DEFAULT_DESIRED_ZOOM,
            flash_quirks: FlashQuirks::default(),
            normalize_orientation: true,
        }
    }

    /// Zoom factor to aim for before the device envelope is applied
    pub fn desired_zoom(mut self, zoom: ZoomFactor) -> Self {
        self.desired_zoom = zoom;
        self
    }

    /// Replace the flash quirk table
    pub fn flash_quirks(mut self, quirks: FlashQuirks) -> Self {
        self.flash_quirks = quirks;
        self
    }

    /// Whether a portrait target has its axes swapped before size
    /// selection; camera sensors report landscape sizes even on rotated
    /// displays
    pub fn normalize_orientation(mut self, enabled: bool) -> Self {
        self.normalize_orientation = enabled;
        self
    }
}

impl Default for NegotiatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Negotiates capture parameters against a capability source
pub struct Negotiator {
    config: NegotiatorConfig,
}

impl Negotiator {
    /// Create a negotiator with default settings
    pub fn new() -> Self {
        Self::with_config(NegotiatorConfig::new())
    }

    /// Create a negotiator with custom settings
    pub fn with_config(config: NegotiatorConfig) -> Self {
        Negotiator { config }
    }

    /// Choose capture parameters for the device behind `source`
    ///
    /// `screen` is the display-derived request; size lists the device
    /// fails to report fall back to the screen size rounded to the
    /// capture pipeline's 8-pixel alignment.
    pub fn negotiate(
        &self,
        source: &dyn CapabilitySource,
        screen: Target,
    ) -> Result<NegotiatedParameters> {
        let target = if self.config.normalize_orientation && screen.width() < screen.height() {
            debug!("normalizing portrait target {}x{}", screen.width(), screen.height());
            screen.transposed()
        } else {
            screen
        };

        let preview_size = self.select_size("preview", &source.preview_sizes(), target)?;
        let picture_size = self.select_size("picture", &source.picture_sizes(), target)?;

        let zoom = source.zoom().map(|capability| {
            let factor = zoom::negotiate(self.config.desired_zoom, &capability);
            debug!("negotiated zoom {factor} (desired {})", self.config.desired_zoom);
            factor
        });

        let device = source.device();
        let flash = self.config.flash_quirks.resolve(&device);
        debug!("flash for {:?}: {} (value {})", device.model, flash.mode, flash.value);

        Ok(NegotiatedParameters {
            preview_size,
            picture_size,
            zoom,
            flash,
        })
    }

    fn select_size(&self, kind: &str, candidates: &[Size], target: Target) -> Result<Size> {
        if candidates.is_empty() {
            let fallback = fallback_size(target);
            warn!("device reported no {kind} sizes, falling back to {fallback}");
            return Ok(fallback);
        }
        let size = best_by_area(candidates, target)?;
        debug!(
            "selected {kind} size {size} for target {}x{}",
            target.width(),
            target.height()
        );
        Ok(size)
    }
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen-derived stand-in when the device reports no sizes: each axis
/// rounded down to the 8-pixel alignment the capture pipeline expects
fn fallback_size(target: Target) -> Size {
    Size::new(round_to_8(target.width()), round_to_8(target.height()))
}

fn round_to_8(value: u32) -> u32 {
    ((value >> 3) << 3).max(8)
}
