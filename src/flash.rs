//! Flash parameter resolution
//!
//! Scanning always runs with the flash off, but a handful of devices
//! interpret the vendor `flash-value` integer differently. Those
//! exceptions live in an explicit quirk table keyed by device identity
//! instead of being probed at runtime.

use std::fmt;

/// Standard flash mode every device is expected to honor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    #[default]
    Off,
    On,
    Auto,
    Torch,
}

impl fmt::Display for FlashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Off => "off",
                Self::On => "on",
                Self::Auto => "auto",
                Self::Torch => "torch",
            }
        )
    }
}

/// Identity of the device being negotiated with, as reported by the
/// platform layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Device model string
    pub model: String,
    /// Platform SDK level
    pub sdk_level: u32,
}

/// One quirk entry: which devices it applies to and the vendor value
/// they need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashQuirk {
    /// Substring matched against the device model
    pub model_contains: String,
    /// SDK level the quirk is restricted to, when any
    pub sdk_level: Option<u32>,
    /// Vendor `flash-value` to send
    pub value: u32,
}

/// Resolved flash parameters for a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSetting {
    pub mode: FlashMode,
    pub value: u32,
}

/// Device quirk table for the vendor flash value
///
/// The first matching entry wins; devices matching no entry get the
/// table's default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashQuirks {
    entries: Vec<FlashQuirk>,
    default_value: u32,
}

impl Default for FlashQuirks {
    fn default() -> Self {
        let mut quirks = Self {
            entries: Vec::new(),
            default_value: 2,
        };

        // Samsung Behold II on SDK 3 expects a different vendor value
        quirks.entries.push(FlashQuirk {
            model_contains: "Behold II".into(),
            sdk_level: Some(3),
            value: 1,
        });

        quirks
    }
}

impl FlashQuirks {
    /// Empty table with the given default vendor value
    pub fn with_default_value(default_value: u32) -> Self {
        Self {
            entries: Vec::new(),
            default_value,
        }
    }

    /// Append a quirk entry; earlier entries take precedence
    pub fn with_entry(mut self, quirk: FlashQuirk) -> Self {
        self.entries.push(quirk);
        self
    }

    /// Resolve the flash parameters for a device
    ///
    /// The mode is always [`FlashMode::Off`] for scanning; only the
    /// vendor value varies per device.
    pub fn resolve(&self, device: &DeviceProfile) -> FlashSetting {
        let value = self
            .entries
            .iter()
            .find(|quirk| {
                device.model.contains(&quirk.model_contains)
                    && quirk.sdk_level.map_or(true, |level| level == device.sdk_level)
            })
            .map_or(self.default_value, |quirk| quirk.value);

        FlashSetting {
            mode: FlashMode::Off,
            value,
        }
    }
}
