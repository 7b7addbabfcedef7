//! Region calculators.
//!
//! One calculator per UI region. Each is a function of the pass context and
//! the results of calculators that ran before it; none of them read global
//! state or fail.

pub mod action_bar;
pub mod camera_dock;
pub mod captions;
pub mod drop_zones;
pub mod media_area;
pub mod nav_bar;
pub mod shared_content;
pub mod sidebar;

use confer_core::{DeviceContext, LayoutConstants, LayoutInput};

use crate::primitives::{window_height, window_width};

/// Read-only inputs shared by every calculator in one pass.
#[derive(Debug, Clone, Copy)]
pub struct RegionContext<'a> {
    pub input: &'a LayoutInput,
    pub device: &'a DeviceContext,
    pub constants: &'a LayoutConstants,
}

impl<'a> RegionContext<'a> {
    pub fn new(
        input: &'a LayoutInput,
        device: &'a DeviceContext,
        constants: &'a LayoutConstants,
    ) -> Self {
        Self { input, device, constants }
    }

    pub fn viewport_width(&self) -> f64 {
        window_width(self.device)
    }

    pub fn viewport_height(&self) -> f64 {
        window_height(self.device)
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    pub fn is_rtl(&self) -> bool {
        self.device.is_rtl
    }
}

/// Plain rectangle used between calculators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right_edge(&self) -> f64 {
        self.left + self.width
    }

    /// Remove `amount` from the top of the rectangle.
    pub fn shrink_top(&self, amount: f64) -> Rect {
        Rect::new(self.top + amount, self.left, self.width, self.height - amount)
    }
}
