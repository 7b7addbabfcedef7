//! Drop targets shown while the camera dock is being dragged.
//!
//! Zones cover the edges of the content band, the part of the stage left
//! free by the navigation sidebar (text-start side) and the sidebar-content
//! column (text-end side).

use confer_core::{Bounds, CameraDockPosition};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::sidebar::SidebarColumn;
use super::{RegionContext, Rect};
use crate::primitives::{max, min};

/// One bounds per drop target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropZones {
    pub content_top: Bounds,
    pub content_bottom: Bounds,
    /// Text-start edge of the content band
    pub content_left: Bounds,
    /// Text-end edge of the content band
    pub content_right: Bounds,
    pub sidebar_content_bottom: Bounds,
}

impl DropZones {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Zones paired with the dock position a drop on them selects.
    pub fn targets(&self) -> [(CameraDockPosition, &Bounds); 5] {
        [
            (CameraDockPosition::Top, &self.content_top),
            (CameraDockPosition::Bottom, &self.content_bottom),
            (CameraDockPosition::Left, &self.content_left),
            (CameraDockPosition::Right, &self.content_right),
            (CameraDockPosition::SidebarBottom, &self.sidebar_content_bottom),
        ]
    }

    /// Dock position under a pointer, if any displayed zone contains it.
    pub fn hit_test(&self, point: DVec2) -> Option<CameraDockPosition> {
        self.targets()
            .into_iter()
            .find(|(_, zone)| zone.display && zone.contains(point))
            .map(|(position, _)| position)
    }

    pub fn any_displayed(&self) -> bool {
        self.targets().iter().any(|(_, zone)| zone.display)
    }
}

/// Compute the drop zones. Everything is hidden unless the dock is displayed
/// and being dragged.
pub fn calculate(
    ctx: &RegionContext,
    stage: Rect,
    dock: &Bounds,
    nav_width: f64,
    column: SidebarColumn,
) -> DropZones {
    if !dock.display || !ctx.input.camera_dock.is_dragging {
        return DropZones::hidden();
    }
    let c = ctx.constants;
    let size = c.drop_zone_size;
    let viewport_width = ctx.viewport_width();
    let column_occupied = column.displayed && !ctx.is_mobile();

    let (band_left, band_right) = if ctx.is_rtl() {
        let left = if column_occupied {
            max(stage.left, column.left + column.width)
        } else {
            stage.left
        };
        (left, stage.right_edge() - nav_width)
    } else {
        let right = if column_occupied {
            min(stage.right_edge(), column.left)
        } else {
            stage.right_edge()
        };
        (stage.left + nav_width, right)
    };
    let band_width = max(band_right - band_left, 0.0);
    let zone_height = min(size, max(stage.height, 0.0));
    let zone_width = min(size, band_width);

    let zone = |top: f64, left: f64, width: f64, height: f64| {
        Bounds::rect(top, left, width, height)
            .with_z_index(dock.z_index)
            .anchored_in(viewport_width)
    };

    let physical_left = zone(stage.top, band_left, zone_width, max(stage.height, 0.0));
    let physical_right = zone(
        stage.top,
        band_right - zone_width,
        zone_width,
        max(stage.height, 0.0),
    );
    let (content_left, content_right) = if ctx.is_rtl() {
        (physical_right, physical_left)
    } else {
        (physical_left, physical_right)
    };

    let sidebar_content_bottom = if column_occupied {
        zone(column.bottom - size, column.left, column.width, size)
    } else {
        Bounds::hidden()
    };

    DropZones {
        content_top: zone(stage.top, band_left, band_width, zone_height),
        content_bottom: zone(stage.bottom() - zone_height, band_left, band_width, zone_height),
        content_left,
        content_right,
        sidebar_content_bottom,
    }
}
