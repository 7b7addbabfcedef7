//! Live captions overlay at the bottom of the stage.

use confer_core::{Bounds, CameraDockPosition};

use super::camera_dock::CameraDock;
use super::{RegionContext, Rect};
use crate::primitives::max;

/// Captions sit right above a bottom dock, otherwise at the stage bottom.
pub fn calculate(ctx: &RegionContext, stage: Rect, dock: &CameraDock, media_collapsed: bool) -> Bounds {
    if !ctx.input.captions.has_captions || media_collapsed {
        return Bounds::hidden();
    }
    let c = ctx.constants;
    let margin = c.captions_margin;

    let height = ctx.device.font_size * c.captions_line_height * c.captions_lines;
    let anchor = if dock.bounds.display && dock.position == CameraDockPosition::Bottom {
        dock.bounds.top
    } else {
        stage.bottom()
    };
    let width = max(stage.width - margin * 2.0, 0.0);
    let top = max(anchor - margin - height, 0.0);

    Bounds::rect(top, stage.left + margin, width, height)
        .with_width_range(0.0, width)
        .with_z_index(c.z.captions)
        .anchored_in(ctx.viewport_width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use confer_core::{DeviceContext, DeviceType, LayoutConstants, LayoutInput};

    fn stage() -> Rect {
        Rect::new(60.0, 0.0, 1920.0, 950.0)
    }

    fn dock(position: CameraDockPosition, bounds: Bounds) -> CameraDock {
        CameraDock {
            bounds,
            position,
            persisted: None,
        }
    }

    #[test]
    fn test_hidden_without_captions() {
        let input = LayoutInput::default();
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0);
        let ctx = RegionContext::new(&input, &device, &constants);
        let none = dock(CameraDockPosition::Top, Bounds::hidden());
        assert!(!calculate(&ctx, stage(), &none, false).display);
    }

    #[test]
    fn test_captions_above_stage_bottom() {
        let mut input = LayoutInput::default();
        input.captions.has_captions = true;
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0);
        let ctx = RegionContext::new(&input, &device, &constants);
        let top_dock = dock(CameraDockPosition::Top, Bounds::rect(60.0, 0.0, 1920.0, 202.0));

        let captions = calculate(&ctx, stage(), &top_dock, false);
        // 16px font, 1.5 line height, two lines
        assert!((captions.height - 48.0).abs() < 0.001);
        assert!((captions.bottom() - 1000.0).abs() < 0.001);
        assert!((captions.left - 10.0).abs() < 0.001);
        assert!((captions.width - 1900.0).abs() < 0.001);
        assert!((captions.max_width - 1900.0).abs() < 0.001);
        assert_eq!(captions.z_index, 3);
    }

    #[test]
    fn test_captions_above_bottom_dock() {
        let mut input = LayoutInput::default();
        input.captions.has_captions = true;
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Desktop, 1920.0, 1080.0).with_font_size(20.0);
        let ctx = RegionContext::new(&input, &device, &constants);
        let bottom_dock = dock(CameraDockPosition::Bottom, Bounds::rect(808.0, 0.0, 1920.0, 202.0));

        let captions = calculate(&ctx, stage(), &bottom_dock, false);
        assert!((captions.height - 60.0).abs() < 0.001);
        assert!((captions.bottom() - 798.0).abs() < 0.001);
    }

    #[test]
    fn test_hidden_when_media_collapsed() {
        let mut input = LayoutInput::default();
        input.captions.has_captions = true;
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Desktop, 300.0, 50.0);
        let ctx = RegionContext::new(&input, &device, &constants);
        let none = dock(CameraDockPosition::Top, Bounds::hidden());
        assert!(!calculate(&ctx, Rect::new(0.0, 0.0, 300.0, -20.0), &none, true).display);
    }
}
