//! Sidebar navigation and sidebar content panels.
//!
//! Both sidebars float over the media area. Navigation sits on the text-start
//! side, content on the text-end side anchored above the action bar. Widths
//! come from viewport-width buckets unless the user resized the panel.

use confer_core::{Bounds, ResizableEdges};

use super::{RegionContext, Rect};
use crate::primitives::{bucket_index, clamp_to_range, max, min};

/// Horizontal extent of the sidebar-content column, computed before the
/// camera dock so a dock in the sidebar can attach to it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SidebarColumn {
    pub displayed: bool,
    pub left: f64,
    pub width: f64,
    /// Bottom edge of the column, right above the action bar
    pub bottom: f64,
}

fn bucket_width(viewport_width: f64, breakpoints: &[f64; 3], widths: &[f64; 4]) -> f64 {
    widths[bucket_index(viewport_width, breakpoints)]
}

/// Width of the navigation sidebar; zero when it is not displayed.
pub fn navigation_width(ctx: &RegionContext) -> f64 {
    if ctx.is_mobile() {
        return 0.0;
    }
    let c = ctx.constants;
    let requested = ctx.input.sidebar_navigation.width;
    let width = if requested > 0.0 {
        clamp_to_range(
            requested,
            c.sidebar_navigation_min_width,
            c.sidebar_navigation_max_width,
        )
    } else {
        bucket_width(
            ctx.viewport_width(),
            &c.sidebar_breakpoints,
            &c.sidebar_navigation_widths,
        )
    };
    min(width, ctx.viewport_width())
}

/// Column occupied by the sidebar-content panel.
pub fn content_column(ctx: &RegionContext, action_bar_height: f64) -> SidebarColumn {
    if !ctx.input.sidebar_content.is_open {
        return SidebarColumn::default();
    }
    let c = ctx.constants;
    let viewport_width = ctx.viewport_width();
    let bottom = max(ctx.viewport_height() - action_bar_height, 0.0);

    if ctx.is_mobile() {
        return SidebarColumn {
            displayed: true,
            left: 0.0,
            width: viewport_width,
            bottom,
        };
    }

    let requested = ctx.input.sidebar_content.width;
    let mut width = if requested > 0.0 {
        clamp_to_range(requested, c.sidebar_content_min_width, c.sidebar_content_max_width)
    } else {
        bucket_width(viewport_width, &c.sidebar_breakpoints, &c.sidebar_content_widths)
    };
    if ctx.device.is_tablet() {
        width = min(width, viewport_width * 0.5);
    }
    width = min(width, viewport_width);

    let left = if ctx.is_rtl() { 0.0 } else { viewport_width - width };
    SidebarColumn {
        displayed: true,
        left,
        width,
        bottom,
    }
}

/// Navigation sidebar. Hidden on mobile regardless of its open flag;
/// otherwise collapsed to a header when closed.
pub fn navigation(ctx: &RegionContext, stage: Rect, action_bar_height: f64, width: f64) -> Bounds {
    if ctx.is_mobile() {
        return Bounds::hidden();
    }
    let c = ctx.constants;
    let viewport_width = ctx.viewport_width();
    let is_open = ctx.input.sidebar_navigation.is_open;

    let max_height = max(ctx.viewport_height() - action_bar_height, 0.0);
    let min_height = min(c.sidebar_min_height, max_height);
    let top = max(stage.top, 0.0);

    let (height, height_range, edges) = if is_open {
        let height = clamp_to_range(max_height - top, min_height, max_height);
        let edge = if ctx.is_rtl() {
            ResizableEdges::left()
        } else {
            ResizableEdges::right()
        };
        (height, (min_height, max_height), edge)
    } else {
        let height = min(c.sidebar_collapsed_height, max_height);
        (height, (height, height), ResizableEdges::NONE)
    };

    let left = if ctx.is_rtl() { viewport_width - width } else { 0.0 };
    Bounds::rect(top, left, width, height)
        .with_width_range(
            min(c.sidebar_navigation_min_width, width),
            c.sidebar_navigation_max_width,
        )
        .with_height_range(height_range.0, height_range.1)
        .with_z_index(c.z.sidebar)
        .with_resizable_edges(edges)
        .anchored_in(viewport_width)
}

/// Sidebar-content panel. `dock_height` is the space taken at the bottom of
/// the column by a camera dock docked there.
pub fn content(ctx: &RegionContext, stage: Rect, column: SidebarColumn, dock_height: f64) -> Bounds {
    if !column.displayed {
        return Bounds::hidden();
    }
    let c = ctx.constants;
    let viewport_width = ctx.viewport_width();

    if ctx.is_mobile() {
        return Bounds::rect(0.0, 0.0, viewport_width, column.bottom)
            .with_z_index(c.z.sidebar)
            .anchored_in(viewport_width);
    }

    let bottom = column.bottom - dock_height;
    let upper = max(column.bottom - dock_height, 0.0);
    let min_height = min(c.sidebar_min_height, upper);

    let (height, height_range, edges) = if ctx.input.sidebar_content.is_expanded() {
        let height = clamp_to_range(bottom - max(stage.top, 0.0), min_height, upper);
        let side = if ctx.is_rtl() {
            ResizableEdges::right()
        } else {
            ResizableEdges::left()
        };
        let edges = ResizableEdges { top: true, ..side };
        (height, (min_height, upper), edges)
    } else {
        let height = min(c.sidebar_collapsed_height, upper);
        (height, (height, height), ResizableEdges::NONE)
    };

    Bounds::rect(bottom - height, column.left, column.width, height)
        .with_width_range(
            min(c.sidebar_content_min_width, column.width),
            c.sidebar_content_max_width,
        )
        .with_height_range(height_range.0, height_range.1)
        .with_z_index(c.z.sidebar)
        .with_resizable_edges(edges)
        .anchored_in(viewport_width)
}
