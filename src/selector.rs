//! Best-fit size selection
//!
//! Three strategies for picking one size out of a device's candidate
//! list: nearest by pixel area (binary search over a sorted view),
//! nearest height within an aspect-ratio tolerance (two-pass scan with
//! graceful fallback), and nearest by Manhattan distance on the raw
//! dimensions. All three are pure functions over caller-owned data.

use crate::error::{Error, Result};
use crate::size::Size;
use std::cmp::Ordering;

/// Maximum absolute deviation between candidate and target aspect ratio
/// before a candidate is excluded from the primary match pass
pub const ASPECT_TOLERANCE: f64 = 0.1;

/// A validated selection target
///
/// Construction rejects zero dimensions, so every selector can assume a
/// geometrically meaningful request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    width: u32,
    height: u32,
}

impl Target {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidTarget { width, height });
        }
        Ok(Target { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Swap the axes, e.g. to normalize a portrait request to landscape
    pub fn transposed(self) -> Self {
        Target {
            width: self.height,
            height: self.width,
        }
    }
}

/// Select the candidate whose pixel area is nearest the target's
///
/// Sorts a local view of the candidates ascending by area and binary
/// searches it; the caller's slice is left untouched. The window
/// invariant is that a candidate with minimal area distance always lies
/// within `[low, high]`; the loop narrows until two bounds remain and
/// the closer one wins. Equidistant bounds resolve to the smaller area.
///
/// Candidates sharing one area but differing in shape are
/// interchangeable as far as this selector is concerned; which one is
/// returned follows from the (area, height, width) sort order.
///
/// # Errors
/// Returns [`Error::EmptyCandidates`] when `candidates` is empty.
pub fn best_by_area(candidates: &[Size], target: Target) -> Result<Size> {
    if candidates.is_empty() {
        return Err(Error::EmptyCandidates);
    }

    let mut sorted = candidates.to_vec();
    sorted.sort_unstable_by_key(|size| size.selection_key());

    let want = target.area();
    let mut low = 0;
    let mut high = sorted.len() - 1;

    while high - low > 1 {
        let mid = low + (high - low) / 2;
        match sorted[mid].area().cmp(&want) {
            Ordering::Equal => return Ok(sorted[mid]),
            Ordering::Less => low = mid,
            Ordering::Greater => high = mid,
        }
    }

    let below = sorted[low];
    let above = sorted[high];
    if want.abs_diff(above.area()) < want.abs_diff(below.area()) {
        Ok(above)
    } else {
        Ok(below)
    }
}

/// Select the candidate nearest the target height among those matching
/// the target aspect ratio, falling back to ignoring aspect entirely
///
/// Pass 1 considers only candidates within [`ASPECT_TOLERANCE`] of the
/// target ratio and keeps the one with the smallest height difference.
/// When no candidate is close enough in shape, pass 2 repeats the
/// height scan over the full list. Ties keep the first candidate in
/// caller order; the list is scanned as given, never sorted.
///
/// Returns `None` only for an empty candidate list; a device reporting
/// no sizes is an expected state, not a caller error.
pub fn best_by_aspect(candidates: &[Size], target: Target) -> Option<Size> {
    let target_ratio = target.aspect_ratio();
    let target_height = target.height();

    let mut best = None;
    let mut min_diff = u32::MAX;
    for &size in candidates {
        if (size.aspect_ratio() - target_ratio).abs() > ASPECT_TOLERANCE {
            continue;
        }
        let diff = size.height.abs_diff(target_height);
        if diff < min_diff {
            best = Some(size);
            min_diff = diff;
        }
    }

    if best.is_none() {
        min_diff = u32::MAX;
        for &size in candidates {
            let diff = size.height.abs_diff(target_height);
            if diff < min_diff {
                best = Some(size);
                min_diff = diff;
            }
        }
    }

    best
}

/// Select the candidate nearest the target by |Δwidth| + |Δheight|
///
/// An exact dimension match short-circuits; ties keep the first
/// candidate in caller order. Returns `None` for an empty list.
pub fn closest_by_dimensions(candidates: &[Size], target: Target) -> Option<Size> {
    let mut best = None;
    let mut min_diff = u64::MAX;
    for &size in candidates {
        let diff = u64::from(size.width.abs_diff(target.width()))
            + u64::from(size.height.abs_diff(target.height()));
        if diff == 0 {
            return Some(size);
        }
        if diff < min_diff {
            best = Some(size);
            min_diff = diff;
        }
    }
    best
}
