//! Tunable layout constants.
//!
//! The pixel values here encode product decisions (margins, breakpoints,
//! minimum sizes). They are kept as named configuration rather than being
//! derived from the layout algorithms.

use crate::errors::ConfigError;

/// Z-index layers, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ZIndices {
    /// Chrome bars and shared content without a camera dock
    pub base: i32,
    /// Shared content while a camera dock is displayed
    pub content_with_cameras: i32,
    pub captions: i32,
    pub camera_dock: i32,
    pub sidebar: i32,
    pub dragging: i32,
    pub fullscreen: i32,
}

impl Default for ZIndices {
    fn default() -> Self {
        Self {
            base: 1,
            content_with_cameras: 2,
            captions: 3,
            camera_dock: 10,
            sidebar: 20,
            dragging: 99,
            fullscreen: 99,
        }
    }
}

/// Every tuned constant the region calculators use.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutConstants {
    /// Font size the action bar height is expressed in
    pub base_font_size: f64,
    pub action_bar_height: f64,
    pub action_bar_padding: f64,
    pub nav_bar_height: f64,
    pub banner_height: f64,
    /// Band reserved for the sidebar-content header
    pub sidebar_panel_height: f64,
    /// Band reserved for the mobile navigation buttons
    pub mobile_buttons_reserve: f64,

    pub camera_dock_min_height: f64,
    pub camera_dock_min_width: f64,
    /// Share of the media area a fresh camera dock takes
    pub camera_dock_default_ratio: f64,
    pub mobile_camera_height: f64,
    pub mobile_camera_height_phone: f64,
    /// Viewport widths below this use the phone camera height
    pub phone_breakpoint: f64,
    /// Width kept free for the shared-content toolbar beside a side dock
    pub presentation_toolbar_min_width: f64,
    pub cameras_margin: f64,

    /// Viewport heights below this count as a small device
    pub small_device_height: f64,
    /// Viewport heights at or above this use the larger portrait overlap
    pub tall_device_height: f64,
    pub small_device_margin: f64,
    pub small_device_bottom_margin: f64,
    pub desktop_margin: f64,
    pub portrait_overlap: f64,
    pub tall_portrait_overlap: f64,
    pub no_camera_offset: f64,

    pub drop_zone_size: f64,

    /// Viewport-width breakpoints for the sidebar width buckets
    pub sidebar_breakpoints: [f64; 3],
    pub sidebar_navigation_widths: [f64; 4],
    pub sidebar_content_widths: [f64; 4],
    pub sidebar_navigation_min_width: f64,
    pub sidebar_navigation_max_width: f64,
    pub sidebar_content_min_width: f64,
    pub sidebar_content_max_width: f64,
    pub sidebar_min_height: f64,
    pub sidebar_collapsed_height: f64,

    pub captions_margin: f64,
    pub captions_line_height: f64,
    pub captions_lines: f64,

    /// Minimum interval between resize-triggered passes, in milliseconds
    pub resize_throttle_ms: f64,

    pub z: ZIndices,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            base_font_size: 14.0,
            action_bar_height: 42.0,
            action_bar_padding: 11.0,
            nav_bar_height: 60.0,
            banner_height: 34.0,
            sidebar_panel_height: 52.0,
            mobile_buttons_reserve: 40.0,

            camera_dock_min_height: 120.0,
            camera_dock_min_width: 120.0,
            camera_dock_default_ratio: 0.2,
            mobile_camera_height: 150.0,
            mobile_camera_height_phone: 100.0,
            phone_breakpoint: 480.0,
            presentation_toolbar_min_width: 430.0,
            cameras_margin: 10.0,

            small_device_height: 700.0,
            tall_device_height: 900.0,
            small_device_margin: 20.0,
            small_device_bottom_margin: 10.0,
            desktop_margin: 28.0,
            portrait_overlap: -35.0,
            tall_portrait_overlap: -48.0,
            no_camera_offset: 12.0,

            drop_zone_size: 100.0,

            sidebar_breakpoints: [768.0, 1280.0, 1920.0],
            sidebar_navigation_widths: [180.0, 220.0, 260.0, 300.0],
            sidebar_content_widths: [280.0, 320.0, 360.0, 400.0],
            sidebar_navigation_min_width: 70.0,
            sidebar_navigation_max_width: 400.0,
            sidebar_content_min_width: 270.0,
            sidebar_content_max_width: 800.0,
            sidebar_min_height: 200.0,
            sidebar_collapsed_height: 52.0,

            captions_margin: 10.0,
            captions_line_height: 1.5,
            captions_lines: 2.0,

            resize_throttle_ms: 50.0,

            z: ZIndices::default(),
        }
    }
}

impl LayoutConstants {
    /// Check that sizes are non-negative, margins finite, ranges ordered and
    /// breakpoints increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes: [(&'static str, f64); 30] = [
            ("baseFontSize", self.base_font_size),
            ("actionBarHeight", self.action_bar_height),
            ("actionBarPadding", self.action_bar_padding),
            ("navBarHeight", self.nav_bar_height),
            ("bannerHeight", self.banner_height),
            ("sidebarPanelHeight", self.sidebar_panel_height),
            ("mobileButtonsReserve", self.mobile_buttons_reserve),
            ("cameraDockMinHeight", self.camera_dock_min_height),
            ("cameraDockMinWidth", self.camera_dock_min_width),
            ("cameraDockDefaultRatio", self.camera_dock_default_ratio),
            ("mobileCameraHeight", self.mobile_camera_height),
            ("mobileCameraHeightPhone", self.mobile_camera_height_phone),
            ("phoneBreakpoint", self.phone_breakpoint),
            ("presentationToolbarMinWidth", self.presentation_toolbar_min_width),
            ("camerasMargin", self.cameras_margin),
            ("smallDeviceHeight", self.small_device_height),
            ("tallDeviceHeight", self.tall_device_height),
            ("smallDeviceMargin", self.small_device_margin),
            ("smallDeviceBottomMargin", self.small_device_bottom_margin),
            ("noCameraOffset", self.no_camera_offset),
            ("dropZoneSize", self.drop_zone_size),
            ("sidebarNavigationMinWidth", self.sidebar_navigation_min_width),
            ("sidebarNavigationMaxWidth", self.sidebar_navigation_max_width),
            ("sidebarContentMinWidth", self.sidebar_content_min_width),
            ("sidebarContentMaxWidth", self.sidebar_content_max_width),
            ("sidebarMinHeight", self.sidebar_min_height),
            ("sidebarCollapsedHeight", self.sidebar_collapsed_height),
            ("captionsMargin", self.captions_margin),
            ("captionsLineHeight", self.captions_line_height),
            ("resizeThrottleMs", self.resize_throttle_ms),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }
        if !self.captions_lines.is_finite() || self.captions_lines < 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "captionsLines",
                value: self.captions_lines,
            });
        }

        // The dynamic margins may be negative (controlled overlap).
        for (name, value) in [
            ("desktopMargin", self.desktop_margin),
            ("portraitOverlap", self.portrait_overlap),
            ("tallPortraitOverlap", self.tall_portrait_overlap),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        for (name, widths) in [
            ("sidebarNavigationWidths", self.sidebar_navigation_widths),
            ("sidebarContentWidths", self.sidebar_content_widths),
        ] {
            if let Some(&value) = widths.iter().find(|w| !w.is_finite() || **w < 0.0) {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }

        let [a, b, c] = self.sidebar_breakpoints;
        if !(a.is_finite() && c.is_finite() && a < b && b < c) {
            return Err(ConfigError::UnorderedBreakpoints {
                breakpoints: self.sidebar_breakpoints,
            });
        }

        for (name, min, max) in [
            (
                "sidebarNavigationWidth",
                self.sidebar_navigation_min_width,
                self.sidebar_navigation_max_width,
            ),
            (
                "sidebarContentWidth",
                self.sidebar_content_min_width,
                self.sidebar_content_max_width,
            ),
        ] {
            if min > max {
                return Err(ConfigError::InvertedRange { name, min, max });
            }
        }

        Ok(())
    }
}
