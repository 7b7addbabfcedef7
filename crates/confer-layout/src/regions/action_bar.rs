//! Action bar along the bottom of the viewport.

use confer_core::Bounds;

use super::RegionContext;

/// Computed action bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionBar {
    pub bounds: Bounds,
    /// Height of the bar content without padding
    pub inner_height: f64,
    /// Vertical space the bar takes away from the media area
    pub reserved_height: f64,
}

/// The bar height follows the root font size; padding does not.
pub fn calculate(ctx: &RegionContext) -> ActionBar {
    let c = ctx.constants;
    let inner_height = if c.base_font_size > 0.0 {
        c.action_bar_height / c.base_font_size * ctx.device.font_size
    } else {
        c.action_bar_height
    };
    let height = inner_height + c.action_bar_padding * 2.0;

    if !ctx.input.action_bar.has_action_bar {
        return ActionBar {
            bounds: Bounds::hidden(),
            inner_height,
            reserved_height: 0.0,
        };
    }

    let bounds = Bounds::rect(ctx.viewport_height() - height, 0.0, ctx.viewport_width(), height)
        .with_z_index(c.z.base)
        .anchored_in(ctx.viewport_width());

    ActionBar {
        bounds,
        inner_height,
        reserved_height: height,
    }
}
