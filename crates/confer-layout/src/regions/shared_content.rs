//! Shared-content bounds: the single main-stage surface showing the active
//! presentation, screen share, external video, plugin content or pinned notes.
//!
//! Placement has to avoid cropping the content, avoid covering the camera
//! dock and stay inside the viewport at the same time. The rules differ per
//! dock slot and per device class, so they are kept as one pure strategy per
//! (slot, class) pair and dispatched through [`STRATEGIES`].

use confer_core::{Bounds, CameraDockPosition, ContentKind, RegionKey};

use super::{RegionContext, Rect};
use crate::primitives::{max, min, DeviceClass};

/// Where the camera dock sits, from the content's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockSlot {
    Top,
    Bottom,
    Left,
    Right,
    SidebarBottom,
    /// No camera dock is displayed
    None,
}

impl DockSlot {
    pub fn of(dock: &Bounds, position: CameraDockPosition) -> Self {
        if !dock.display {
            return DockSlot::None;
        }
        match position {
            CameraDockPosition::Top => DockSlot::Top,
            CameraDockPosition::Bottom => DockSlot::Bottom,
            CameraDockPosition::Left => DockSlot::Left,
            CameraDockPosition::Right => DockSlot::Right,
            CameraDockPosition::SidebarBottom => DockSlot::SidebarBottom,
        }
    }
}

/// Orientation of the primary content's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Landscape,
    Portrait,
}

/// Everything a placement strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub ctx: &'a RegionContext<'a>,
    pub stage: Rect,
    pub dock: Bounds,
    pub aspect: Aspect,
}

type Strategy = fn(&Placement) -> Rect;

/// Placement strategy per dock slot and device class.
pub const STRATEGIES: [(DockSlot, DeviceClass, Strategy); 12] = [
    (DockSlot::Top, DeviceClass::Small, below_dock_small),
    (DockSlot::Top, DeviceClass::Regular, below_dock_regular),
    (DockSlot::Bottom, DeviceClass::Small, above_dock),
    (DockSlot::Bottom, DeviceClass::Regular, above_dock),
    (DockSlot::Left, DeviceClass::Small, beside_dock),
    (DockSlot::Left, DeviceClass::Regular, beside_dock),
    (DockSlot::Right, DeviceClass::Small, beside_dock),
    (DockSlot::Right, DeviceClass::Regular, beside_dock),
    (DockSlot::SidebarBottom, DeviceClass::Small, full_stage),
    (DockSlot::SidebarBottom, DeviceClass::Regular, full_stage),
    (DockSlot::None, DeviceClass::Small, without_cameras),
    (DockSlot::None, DeviceClass::Regular, without_cameras),
];

/// Find the strategy for a slot and device class.
pub fn lookup(slot: DockSlot, class: DeviceClass) -> Strategy {
    STRATEGIES
        .iter()
        .find(|(s, c, _)| *s == slot && *c == class)
        .map(|(_, _, strategy)| *strategy)
        .unwrap_or(full_stage)
}

/// Gap between the dock's bottom edge and the content under a top dock.
/// Negative values let tall content creep under the dock on roomy screens.
pub fn top_dock_margin(ctx: &RegionContext, class: DeviceClass, aspect: Aspect) -> f64 {
    let c = ctx.constants;
    match (class, aspect) {
        (DeviceClass::Small, _) => c.small_device_margin,
        (DeviceClass::Regular, Aspect::Landscape) => c.desktop_margin,
        (DeviceClass::Regular, Aspect::Portrait) if ctx.viewport_height() >= c.tall_device_height => {
            c.tall_portrait_overlap
        }
        (DeviceClass::Regular, Aspect::Portrait) => c.portrait_overlap,
    }
}

fn below_dock_small(p: &Placement) -> Rect {
    let c = p.ctx.constants;
    let margin = top_dock_margin(p.ctx, DeviceClass::Small, p.aspect);
    let top = max(p.dock.bottom() + margin, p.stage.top);
    // Capped to the space left below the dock so nothing overflows.
    let height = p.stage.bottom() - top - c.small_device_bottom_margin;
    Rect::new(top, p.stage.left, p.stage.width, height)
}

fn below_dock_regular(p: &Placement) -> Rect {
    let margin = top_dock_margin(p.ctx, DeviceClass::Regular, p.aspect);
    let top = max(p.dock.bottom() + margin, p.stage.top);
    Rect::new(top, p.stage.left, p.stage.width, p.stage.bottom() - top)
}

fn above_dock(p: &Placement) -> Rect {
    let c = p.ctx.constants;
    let bottom = min(p.dock.top - c.cameras_margin, p.stage.bottom());
    Rect::new(p.stage.top, p.stage.left, p.stage.width, bottom - p.stage.top)
}

fn beside_dock(p: &Placement) -> Rect {
    let c = p.ctx.constants;
    let stage = p.stage;
    let dock_center = p.dock.left + p.dock.width / 2.0;
    let stage_center = stage.left + stage.width / 2.0;
    if dock_center <= stage_center {
        let left = p.dock.right_edge() + c.cameras_margin;
        Rect::new(stage.top, left, stage.right_edge() - left, stage.height)
    } else {
        let right = p.dock.left - c.cameras_margin;
        Rect::new(stage.top, stage.left, right - stage.left, stage.height)
    }
}

fn full_stage(p: &Placement) -> Rect {
    p.stage
}

fn without_cameras(p: &Placement) -> Rect {
    if p.ctx.is_mobile() {
        return p.stage;
    }
    p.stage.shrink_top(p.ctx.constants.no_camera_offset)
}

/// Computed shared-content bounds for every content region.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedContent {
    /// Bounds shared by all open content regions, before fullscreen
    pub bounds: Bounds,
    pub regions: Vec<(RegionKey, Bounds)>,
}

impl SharedContent {
    /// Bounds emitted for one content kind.
    pub fn get(&self, kind: ContentKind) -> Bounds {
        let key = RegionKey::from(kind);
        self.regions
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, bounds)| *bounds)
            .unwrap_or_default()
    }
}

fn content_aspect(ctx: &RegionContext) -> Aspect {
    ctx.input
        .primary_content()
        .and_then(|kind| ctx.input.content_source_size(kind))
        .map(|(width, height)| if height > width { Aspect::Portrait } else { Aspect::Landscape })
        .unwrap_or(Aspect::Landscape)
}

/// Compute the shared bounds and the per-region bounds.
pub fn calculate(
    ctx: &RegionContext,
    media_height: f64,
    stage: Rect,
    dock: &Bounds,
    dock_position: CameraDockPosition,
) -> SharedContent {
    let c = ctx.constants;

    let bounds = if !ctx.input.has_shared_content() || !(media_height > 0.0) {
        Bounds::hidden()
    } else {
        let class = DeviceClass::of(ctx.device, c);
        let slot = DockSlot::of(dock, dock_position);
        let placement = Placement {
            ctx,
            stage,
            dock: *dock,
            aspect: content_aspect(ctx),
        };
        let rect = lookup(slot, class)(&placement);
        let z_index = if slot == DockSlot::None {
            c.z.base
        } else {
            c.z.content_with_cameras
        };
        Bounds::rect(rect.top, rect.left, max(rect.width, 0.0), max(rect.height, 0.0))
            .with_z_index(z_index)
            .anchored_in(ctx.viewport_width())
    };

    let regions = ContentKind::BY_PRIORITY
        .iter()
        .map(|&kind| {
            let key = RegionKey::from(kind);
            let region = if !ctx.input.is_content_open(kind) {
                Bounds::hidden()
            } else if ctx.device.is_fullscreen(key.as_str()) {
                Bounds::rect(0.0, 0.0, ctx.viewport_width(), ctx.viewport_height())
                    .with_z_index(c.z.fullscreen)
            } else {
                bounds
            };
            (key, region)
        })
        .collect();

    SharedContent { bounds, regions }
}
