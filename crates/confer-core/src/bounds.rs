//! Computed region bounds.
//!
//! Every region the engine lays out is described by a [`Bounds`] value. The
//! rendering layer positions panels from these values and nothing else.

use glam::DVec2;

/// Which edges of a region can be dragged to resize it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizableEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl ResizableEdges {
    /// No resizable edges.
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub fn top() -> Self {
        Self { top: true, ..Self::NONE }
    }

    pub fn bottom() -> Self {
        Self { bottom: true, ..Self::NONE }
    }

    pub fn left() -> Self {
        Self { left: true, ..Self::NONE }
    }

    pub fn right() -> Self {
        Self { right: true, ..Self::NONE }
    }

    /// Whether any edge is resizable.
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Position, size, layering and resize affordances of one region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Bounds {
    /// Distance from the viewport top edge
    pub top: f64,
    /// Distance from the viewport left edge
    pub left: f64,
    /// Distance from the viewport right edge to the region's right edge
    pub right: f64,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub z_index: i32,
    /// Whether the region occupies any visual space
    pub display: bool,
    pub is_resizable: bool,
    pub resizable_edges: ResizableEdges,
}

impl Bounds {
    /// A region that is not displayed. All numeric fields are zero.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// A displayed, non-resizable rectangle with fixed size limits.
    pub fn rect(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: 0.0,
            width,
            height,
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
            z_index: 0,
            display: true,
            is_resizable: false,
            resizable_edges: ResizableEdges::NONE,
        }
    }

    /// Set the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the resizable edges. The region is resizable when any edge is.
    pub fn with_resizable_edges(mut self, edges: ResizableEdges) -> Self {
        self.resizable_edges = edges;
        self.is_resizable = edges.any();
        self
    }

    /// Set the width limits.
    pub fn with_width_range(mut self, min: f64, max: f64) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Set the height limits.
    pub fn with_height_range(mut self, min: f64, max: f64) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// Compute `right` from the viewport width.
    pub fn anchored_in(mut self, viewport_width: f64) -> Self {
        self.right = (viewport_width - self.left - self.width).max(0.0);
        self
    }

    /// Replace any negative numeric field with zero. Hidden regions are
    /// normalized to [`Bounds::hidden`].
    pub fn normalized(self) -> Self {
        if !self.display {
            return Self::hidden();
        }
        let non_negative = |v: f64| if v < 0.0 { 0.0 } else { v };
        Self {
            top: non_negative(self.top),
            left: non_negative(self.left),
            right: non_negative(self.right),
            width: non_negative(self.width),
            height: non_negative(self.height),
            min_width: non_negative(self.min_width),
            max_width: non_negative(self.max_width),
            min_height: non_negative(self.min_height),
            max_height: non_negative(self.max_height),
            z_index: self.z_index.max(0),
            ..self
        }
    }

    /// Bottom edge (top + height).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge measured from the viewport left (left + width).
    pub fn right_edge(&self) -> f64 {
        self.left + self.width
    }

    /// Top-left corner.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// Width and height.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Check if a point lies inside a displayed region.
    pub fn contains(&self, point: DVec2) -> bool {
        let min = self.position();
        let max = min + self.size();
        self.display && point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_is_zeroed() {
        let hidden = Bounds::hidden();
        assert!(!hidden.display);
        assert_eq!(hidden.width, 0.0);
        assert_eq!(hidden.z_index, 0);
        assert!(!hidden.is_resizable);
    }

    #[test]
    fn test_normalized_clamps_negative_fields() {
        let bounds = Bounds::rect(-10.0, 5.0, -3.0, 40.0).with_height_range(-1.0, 40.0);
        let normalized = bounds.normalized();
        assert_eq!(normalized.top, 0.0);
        assert_eq!(normalized.left, 5.0);
        assert_eq!(normalized.width, 0.0);
        assert_eq!(normalized.min_height, 0.0);
    }

    #[test]
    fn test_normalized_hidden_drops_fields() {
        let mut bounds = Bounds::rect(10.0, 10.0, 100.0, 100.0);
        bounds.display = false;
        assert_eq!(bounds.normalized(), Bounds::hidden());
    }

    #[test]
    fn test_anchored_right() {
        let bounds = Bounds::rect(0.0, 100.0, 300.0, 50.0).anchored_in(1000.0);
        assert!((bounds.right - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::rect(20.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains(DVec2::new(50.0, 40.0)));
        assert!(!bounds.contains(DVec2::new(5.0, 40.0)));
        assert!(!bounds.contains(DVec2::new(50.0, 100.0)));
        assert!(!Bounds::hidden().contains(DVec2::ZERO));
    }

    #[test]
    fn test_resizable_edges_mark_resizable() {
        let bounds = Bounds::rect(0.0, 0.0, 10.0, 10.0).with_resizable_edges(ResizableEdges::bottom());
        assert!(bounds.is_resizable);
        assert!(bounds.resizable_edges.bottom);
        let fixed = bounds.with_resizable_edges(ResizableEdges::NONE);
        assert!(!fixed.is_resizable);
    }
}
