//! Media area: the rectangle available to shared content and the camera dock.
//!
//! Sidebars float over the media area, so its width is the full viewport.

use super::{RegionContext, Rect};

/// Computed media area with the reservations that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaArea {
    /// Raw rectangle; the height may be non-positive on tiny viewports
    pub rect: Rect,
    pub banner_height: f64,
    pub sidebar_panel_height: f64,
    pub mobile_reserve: f64,
}

impl MediaArea {
    /// Whether there is any room for content at all.
    pub fn is_collapsed(&self) -> bool {
        !(self.rect.height > 0.0)
    }
}

/// Height is the viewport minus every reserved band. No clamping is done
/// here; callers treat a non-positive height as "nothing is open".
pub fn calculate(ctx: &RegionContext, action_bar_height: f64) -> MediaArea {
    let c = ctx.constants;
    let mobile = ctx.is_mobile();

    let banner_height = if !mobile && ctx.input.banner_bar.has_banner {
        c.banner_height
    } else {
        0.0
    };
    let sidebar_panel_height = if !mobile && ctx.input.sidebar_content.is_open {
        c.sidebar_panel_height
    } else {
        0.0
    };
    let mobile_reserve = if mobile { c.mobile_buttons_reserve } else { 0.0 };

    let height = ctx.viewport_height()
        - (action_bar_height + banner_height + sidebar_panel_height + mobile_reserve);

    MediaArea {
        rect: Rect::new(banner_height, 0.0, ctx.viewport_width(), height),
        banner_height,
        sidebar_panel_height,
        mobile_reserve,
    }
}
