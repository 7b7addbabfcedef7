//! TypeScript-friendly type definitions for WASM bindings.

use confer_core::{CameraDockPosition, DeviceType, LayoutConstants, ZIndices};
use confer_layout::{OutputPayload, OutputSink, OutputUpdate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the binding layer before reaching the engine.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Unknown device type '{0}', expected MOBILE, TABLET or DESKTOP")]
    UnknownDeviceType(String),
}

/// Parse a device type name; `None` means "not detected yet".
pub fn parse_device_type(name: Option<&str>) -> Result<Option<DeviceType>, BindingError> {
    match name {
        None => Ok(None),
        Some(name) => DeviceType::from_name(name)
            .map(Some)
            .ok_or_else(|| BindingError::UnknownDeviceType(name.to_string())),
    }
}

/// Sink keeping only the most recent batch of updates.
#[derive(Debug, Clone, Default)]
pub struct LatestBatch {
    pub updates: Vec<OutputUpdate>,
    /// Number of batches received so far
    pub passes: u64,
}

impl OutputSink for LatestBatch {
    fn apply(&mut self, updates: &[OutputUpdate]) {
        self.updates = updates.to_vec();
        self.passes += 1;
    }
}

impl LatestBatch {
    /// Dock position targeted by a pointer in the current drop zones.
    pub fn drop_target(&self, x: f64, y: f64) -> Option<CameraDockPosition> {
        self.updates.iter().find_map(|update| match update.payload {
            OutputPayload::DropZones(zones) => zones.hit_test(glam::DVec2::new(x, y)),
            OutputPayload::Bounds(_) => None,
        })
    }
}

/// Partial layout constants from JavaScript. Missing fields keep their
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConstantsJs {
    pub base_font_size: Option<f64>,
    pub action_bar_height: Option<f64>,
    pub action_bar_padding: Option<f64>,
    pub nav_bar_height: Option<f64>,
    pub banner_height: Option<f64>,
    pub sidebar_panel_height: Option<f64>,
    pub mobile_buttons_reserve: Option<f64>,
    pub camera_dock_min_height: Option<f64>,
    pub camera_dock_min_width: Option<f64>,
    pub camera_dock_default_ratio: Option<f64>,
    pub mobile_camera_height: Option<f64>,
    pub mobile_camera_height_phone: Option<f64>,
    pub phone_breakpoint: Option<f64>,
    pub presentation_toolbar_min_width: Option<f64>,
    pub cameras_margin: Option<f64>,
    pub small_device_height: Option<f64>,
    pub tall_device_height: Option<f64>,
    pub small_device_margin: Option<f64>,
    pub small_device_bottom_margin: Option<f64>,
    pub desktop_margin: Option<f64>,
    pub portrait_overlap: Option<f64>,
    pub tall_portrait_overlap: Option<f64>,
    pub no_camera_offset: Option<f64>,
    pub drop_zone_size: Option<f64>,
    pub sidebar_breakpoints: Option<[f64; 3]>,
    pub sidebar_navigation_widths: Option<[f64; 4]>,
    pub sidebar_content_widths: Option<[f64; 4]>,
    pub sidebar_navigation_min_width: Option<f64>,
    pub sidebar_navigation_max_width: Option<f64>,
    pub sidebar_content_min_width: Option<f64>,
    pub sidebar_content_max_width: Option<f64>,
    pub sidebar_min_height: Option<f64>,
    pub sidebar_collapsed_height: Option<f64>,
    pub captions_margin: Option<f64>,
    pub captions_line_height: Option<f64>,
    pub captions_lines: Option<f64>,
    pub resize_throttle_ms: Option<f64>,
    /// Z-index overrides; missing layers keep their defaults
    pub z: Option<ZIndices>,
}

macro_rules! merge {
    ($target:ident, $source:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $source.$field {
                $target.$field = value;
            }
        )+
    };
}

impl LayoutConstantsJs {
    /// Merge onto the default constants. Validation happens when the result
    /// is handed to the engine.
    pub fn into_core(self) -> LayoutConstants {
        let mut constants = LayoutConstants::default();
        merge!(
            constants,
            self,
            base_font_size,
            action_bar_height,
            action_bar_padding,
            nav_bar_height,
            banner_height,
            sidebar_panel_height,
            mobile_buttons_reserve,
            camera_dock_min_height,
            camera_dock_min_width,
            camera_dock_default_ratio,
            mobile_camera_height,
            mobile_camera_height_phone,
            phone_breakpoint,
            presentation_toolbar_min_width,
            cameras_margin,
            small_device_height,
            tall_device_height,
            small_device_margin,
            small_device_bottom_margin,
            desktop_margin,
            portrait_overlap,
            tall_portrait_overlap,
            no_camera_offset,
            drop_zone_size,
            sidebar_breakpoints,
            sidebar_navigation_widths,
            sidebar_content_widths,
            sidebar_navigation_min_width,
            sidebar_navigation_max_width,
            sidebar_content_min_width,
            sidebar_content_max_width,
            sidebar_min_height,
            sidebar_collapsed_height,
            captions_margin,
            captions_line_height,
            captions_lines,
            resize_throttle_ms,
            z,
        );
        constants
    }
}
