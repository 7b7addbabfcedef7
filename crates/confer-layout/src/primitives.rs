//! Geometry primitives shared by the region calculators.
//!
//! `min`/`max` propagate NaN the way the host's number math does, unlike
//! `f64::min`/`f64::max` which discard it. Callers own input validity.

use confer_core::{DeviceContext, LayoutConstants};

/// Smaller of two values. NaN in either input yields NaN.
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values. NaN in either input yields NaN.
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a > b {
        a
    } else {
        b
    }
}

/// Clamp `value` into `[lo, hi]`. When `lo > hi` the upper bound wins.
pub fn clamp_to_range(value: f64, lo: f64, hi: f64) -> f64 {
    min(max(value, lo), hi)
}

/// Viewport width from the injected device context.
pub fn window_width(device: &DeviceContext) -> f64 {
    max(device.viewport_width, 0.0)
}

/// Viewport height from the injected device context.
pub fn window_height(device: &DeviceContext) -> f64 {
    max(device.viewport_height, 0.0)
}

/// Device classification used by the shared-content placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Viewport shorter than the small-device threshold; content must never
    /// overlap the camera dock
    Small,
    Regular,
}

impl DeviceClass {
    pub fn of(device: &DeviceContext, constants: &LayoutConstants) -> Self {
        if window_height(device) < constants.small_device_height {
            DeviceClass::Small
        } else {
            DeviceClass::Regular
        }
    }
}

/// Index of the bucket `value` falls in, given increasing breakpoints.
pub fn bucket_index(value: f64, breakpoints: &[f64]) -> usize {
    breakpoints.iter().take_while(|&&bp| value >= bp).count()
}
