//! Device and viewport facts.

/// Detected device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    /// Parse the host's device category name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mobile" | "phone" => Some(Self::Mobile),
            "tablet" => Some(Self::Tablet),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }
}

/// Device and viewport facts read once per layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DeviceContext {
    /// `None` until the host has detected the device category
    pub device_type: Option<DeviceType>,
    /// Right-to-left text direction
    pub is_rtl: bool,
    /// Region key of the element currently in fullscreen, if any
    pub fullscreen_element_id: Option<String>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Root font size in pixels
    pub font_size: f64,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self {
            device_type: None,
            is_rtl: false,
            fullscreen_element_id: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
            font_size: 16.0,
        }
    }
}

impl DeviceContext {
    /// Create a context for a detected device and viewport size.
    pub fn new(device_type: DeviceType, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            device_type: Some(device_type),
            viewport_width,
            viewport_height,
            ..Default::default()
        }
    }

    /// Switch to right-to-left text direction.
    pub fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Set the root font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the fullscreen element.
    pub fn with_fullscreen(mut self, element_id: impl Into<String>) -> Self {
        self.fullscreen_element_id = Some(element_id.into());
        self
    }

    pub fn is_mobile(&self) -> bool {
        self.device_type == Some(DeviceType::Mobile)
    }

    pub fn is_tablet(&self) -> bool {
        self.device_type == Some(DeviceType::Tablet)
    }

    /// Whether the device type has been detected.
    pub fn is_detected(&self) -> bool {
        self.device_type.is_some()
    }

    /// Whether the fullscreen element is the given region key.
    pub fn is_fullscreen(&self, key: &str) -> bool {
        self.fullscreen_element_id.as_deref() == Some(key)
    }
}
