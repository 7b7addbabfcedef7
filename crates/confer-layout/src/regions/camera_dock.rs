//! Camera dock: the panel hosting participant video tiles.
//!
//! The dock can sit on any of five positions. Its size along the resizable
//! axis comes from an active resize gesture, the size persisted after the last
//! gesture, or a share of the available space, always clamped to the
//! position's limits. When a gesture ends, the resulting size is written to
//! the session store.

use confer_core::{Bounds, CameraDockPosition, RegionKey, ResizableEdges};
use tracing::{info, warn};

use super::media_area::MediaArea;
use super::sidebar::SidebarColumn;
use super::{RegionContext, Rect};
use crate::primitives::{clamp_to_range, max, min};
use crate::store::{PersistedSize, SessionStore, WebcamSize};

/// Phase of the drag/resize gesture relative to the previous pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTransition {
    /// No gesture now or in the previous pass
    Idle,
    /// A gesture is in progress
    Active,
    /// A gesture was active in the previous pass and is not anymore
    Ended,
}

impl GestureTransition {
    pub fn between(was_active: bool, is_active: bool) -> Self {
        match (was_active, is_active) {
            (_, true) => GestureTransition::Active,
            (true, false) => GestureTransition::Ended,
            (false, false) => GestureTransition::Idle,
        }
    }
}

/// Results of earlier calculators the dock is placed against.
#[derive(Debug, Clone, Copy)]
pub struct DockEnvironment {
    pub media: MediaArea,
    pub stage: Rect,
    pub column: SidebarColumn,
    pub action_bar_height: f64,
}

/// Computed camera dock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDock {
    pub bounds: Bounds,
    /// Position actually used after device fallbacks
    pub position: CameraDockPosition,
    /// Size written to the store in this pass, if any
    pub persisted: Option<WebcamSize>,
}

impl CameraDock {
    fn hidden(position: CameraDockPosition) -> Self {
        Self {
            bounds: Bounds::hidden(),
            position,
            persisted: None,
        }
    }
}

/// Axis a position resizes along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

/// Where the size along the resizable axis comes from.
#[derive(Debug, Clone, Copy)]
struct SizeRequest {
    transient: f64,
    stored: f64,
    use_transient: bool,
}

impl SizeRequest {
    fn resolve(&self, default: f64) -> f64 {
        if self.use_transient && self.transient > 0.0 {
            self.transient
        } else if self.stored > 0.0 {
            self.stored
        } else {
            default
        }
    }
}

/// Position after device fallbacks: phones only stack cameras vertically, and
/// the sidebar slot needs a displayed sidebar-content column.
pub fn effective_position(ctx: &RegionContext, column: &SidebarColumn) -> CameraDockPosition {
    let requested = ctx.input.camera_dock.position;
    match requested {
        CameraDockPosition::Left | CameraDockPosition::Right if ctx.is_mobile() => {
            CameraDockPosition::Top
        }
        CameraDockPosition::SidebarBottom if ctx.is_mobile() || !column.displayed => {
            CameraDockPosition::Bottom
        }
        other => other,
    }
}

/// Compute the dock bounds, persisting the manual size on gesture end.
pub fn calculate<S: SessionStore + ?Sized>(
    ctx: &RegionContext,
    env: &DockEnvironment,
    store: &mut S,
    transition: GestureTransition,
) -> CameraDock {
    let c = ctx.constants;
    let dock = &ctx.input.camera_dock;
    let position = effective_position(ctx, &env.column);

    if dock.num_cameras == 0 || env.media.is_collapsed() {
        return CameraDock::hidden(position);
    }

    if ctx.device.is_fullscreen(RegionKey::CameraDock.as_str()) {
        let bounds = Bounds::rect(0.0, 0.0, ctx.viewport_width(), ctx.viewport_height())
            .with_z_index(c.z.fullscreen);
        return CameraDock {
            bounds,
            position,
            persisted: None,
        };
    }

    if ctx.is_mobile() {
        return CameraDock {
            bounds: mobile_bounds(ctx, env, position),
            position,
            persisted: None,
        };
    }

    let stored = PersistedSize::load(store).webcam;
    let use_transient = dock.is_resizing || transition == GestureTransition::Ended;

    let (bounds, axis) = match position {
        CameraDockPosition::Top | CameraDockPosition::Bottom => {
            let request = SizeRequest {
                transient: dock.height,
                stored: stored.height,
                use_transient,
            };
            (stacked_bounds(ctx, env, position, request), Axis::Height)
        }
        CameraDockPosition::Left | CameraDockPosition::Right => {
            let request = SizeRequest {
                transient: dock.width,
                stored: stored.width,
                use_transient,
            };
            (side_bounds(ctx, env, position, request), Axis::Width)
        }
        CameraDockPosition::SidebarBottom => {
            let request = SizeRequest {
                transient: dock.height,
                stored: stored.height,
                use_transient,
            };
            (sidebar_bounds(ctx, env, request), Axis::Height)
        }
    };

    let z_index = if dock.is_dragging { c.z.dragging } else { c.z.camera_dock };
    let bounds = bounds.with_z_index(z_index).anchored_in(ctx.viewport_width());

    let persisted = if transition == GestureTransition::Ended {
        let size = match axis {
            Axis::Height => WebcamSize {
                width: if dock.width > 0.0 { dock.width } else { stored.width },
                height: bounds.height,
            },
            Axis::Width => WebcamSize {
                width: bounds.width,
                height: if dock.height > 0.0 { dock.height } else { stored.height },
            },
        };
        match PersistedSize::store_webcam(store, size) {
            Ok(()) => {
                info!(width = size.width, height = size.height, ?position, "persisted camera dock size");
                Some(size)
            }
            Err(err) => {
                warn!(error = %err, "failed to persist camera dock size");
                None
            }
        }
    } else {
        None
    };

    CameraDock {
        bounds,
        position,
        persisted,
    }
}

/// Fixed-height strip on phones and small tablets in mobile mode.
fn mobile_bounds(ctx: &RegionContext, env: &DockEnvironment, position: CameraDockPosition) -> Bounds {
    let c = ctx.constants;
    let media = env.media.rect;
    let preferred = if ctx.viewport_width() < c.phone_breakpoint {
        c.mobile_camera_height_phone
    } else {
        c.mobile_camera_height
    };
    let height = min(preferred, media.height);
    let top = match position {
        CameraDockPosition::Bottom => media.bottom() - height,
        _ => media.top,
    };
    let z_index = if ctx.input.camera_dock.is_dragging {
        c.z.dragging
    } else {
        c.z.camera_dock
    };
    Bounds::rect(top, media.left, media.width, height)
        .with_z_index(z_index)
        .anchored_in(ctx.viewport_width())
}

/// Dock above or below the content, full media width.
fn stacked_bounds(
    ctx: &RegionContext,
    env: &DockEnvironment,
    position: CameraDockPosition,
    request: SizeRequest,
) -> Bounds {
    let c = ctx.constants;
    let media = env.media.rect;
    let min_height = c.camera_dock_min_height;
    let max_height = max(media.height - min_height, 0.0);
    let height = clamp_to_range(
        request.resolve(media.height * c.camera_dock_default_ratio),
        min_height,
        max_height,
    );

    let (top, edges) = match position {
        CameraDockPosition::Bottom => (media.bottom() - height, ResizableEdges::top()),
        _ => (env.stage.top, ResizableEdges::bottom()),
    };

    Bounds::rect(top, media.left, media.width, height)
        .with_height_range(min(min_height, max_height), max_height)
        .with_resizable_edges(edges)
}

/// Dock beside the content, full stage height. Left and right follow the text
/// direction: left is the start side.
fn side_bounds(
    ctx: &RegionContext,
    env: &DockEnvironment,
    position: CameraDockPosition,
    request: SizeRequest,
) -> Bounds {
    let c = ctx.constants;
    let media = env.media.rect;
    let min_width = c.camera_dock_min_width;
    // Keep room for the shared-content toolbar next to the dock.
    let max_width = min(
        max(media.width - c.presentation_toolbar_min_width, min_width),
        media.width,
    );
    let width = clamp_to_range(
        request.resolve(media.width * c.camera_dock_default_ratio),
        min_width,
        max_width,
    );

    let on_physical_left = (position == CameraDockPosition::Left) != ctx.is_rtl();
    let (left, edges) = if on_physical_left {
        (media.left, ResizableEdges::right())
    } else {
        (media.right_edge() - width, ResizableEdges::left())
    };
    let height = max(env.stage.height, 0.0);

    Bounds::rect(env.stage.top, left, width, height)
        .with_width_range(min(min_width, max_width), max_width)
        .with_resizable_edges(edges)
}

/// Dock at the bottom of the sidebar-content column. Its limits follow the
/// viewport height rather than the media area.
fn sidebar_bounds(ctx: &RegionContext, env: &DockEnvironment, request: SizeRequest) -> Bounds {
    let c = ctx.constants;
    let column = env.column;
    let min_height = c.camera_dock_min_height;
    let max_height = max(ctx.viewport_height() - env.action_bar_height - min_height, 0.0);
    let height = clamp_to_range(
        request.resolve(ctx.viewport_height() * c.camera_dock_default_ratio),
        min_height,
        max_height,
    );

    Bounds::rect(column.bottom - height, column.left, column.width, height)
        .with_height_range(min(min_height, max_height), max_height)
        .with_resizable_edges(ResizableEdges::top())
}
