//! Nav bar floating over the top of the media area.

use confer_core::Bounds;

use super::RegionContext;

/// Computed nav bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBar {
    pub bounds: Bounds,
    /// Gap between the media-area top and the content stage
    pub offset: f64,
}

/// The nav bar sits right below the banner. Mobile layouts use the
/// navigation buttons band instead.
pub fn calculate(ctx: &RegionContext, banner_height: f64) -> NavBar {
    let c = ctx.constants;
    if ctx.is_mobile() || !ctx.input.nav_bar.has_nav_bar {
        return NavBar {
            bounds: Bounds::hidden(),
            offset: 0.0,
        };
    }

    let bounds = Bounds::rect(banner_height, 0.0, ctx.viewport_width(), c.nav_bar_height)
        .with_z_index(c.z.base)
        .anchored_in(ctx.viewport_width());

    NavBar {
        bounds,
        offset: c.nav_bar_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confer_core::{DeviceContext, DeviceType, LayoutConstants, LayoutInput};

    #[test]
    fn test_desktop_nav_bar() {
        let input = LayoutInput::default();
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Desktop, 1280.0, 800.0);
        let nav = calculate(&RegionContext::new(&input, &device, &constants), 34.0);
        assert!(nav.bounds.display);
        assert!((nav.bounds.top - 34.0).abs() < 0.001);
        assert!((nav.offset - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_mobile_has_no_nav_bar() {
        let input = LayoutInput::default();
        let constants = LayoutConstants::default();
        let device = DeviceContext::new(DeviceType::Mobile, 375.0, 667.0);
        let nav = calculate(&RegionContext::new(&input, &device, &constants), 0.0);
        assert!(!nav.bounds.display);
        assert_eq!(nav.offset, 0.0);
    }
}
