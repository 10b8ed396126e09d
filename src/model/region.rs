//! Page geometry types.

use serde::{Deserialize, Serialize};

/// A vertical slice of a page, `[top, bottom)`, used as the unit of text
/// extraction.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page, the convention layout collaborators report table boxes in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Top edge (inclusive)
    pub top: f32,

    /// Bottom edge (exclusive)
    pub bottom: f32,

    /// Width of the page the region belongs to
    pub page_width: f32,

    /// Height of the page the region belongs to
    pub page_height: f32,
}

impl Region {
    /// Create a region spanning `[top, bottom)` across the full page width.
    pub fn new(top: f32, bottom: f32, page_width: f32, page_height: f32) -> Self {
        Self {
            top,
            bottom,
            page_width,
            page_height,
        }
    }

    /// Height of the interval.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if the region can be extracted from.
    ///
    /// Non-finite coordinates, empty or inverted intervals, and intervals
    /// lying entirely off the page are invalid.
    pub fn is_valid(&self) -> bool {
        let finite = [self.top, self.bottom, self.page_width, self.page_height]
            .iter()
            .all(|v| v.is_finite());

        finite && self.height() > 0.0 && self.bottom > 0.0 && self.top < self.page_height
    }

    /// Check if `[top, bottom]` lies fully within this region.
    pub fn contains_span(&self, top: f32, bottom: f32) -> bool {
        top >= self.top && bottom <= self.bottom
    }
}

/// An axis-aligned box `(x0, top, x1, bottom)` in page points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, top: f32, x1: f32, bottom: f32) -> Self {
        Self { x0, top, x1, bottom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_valid() {
        let region = Region::new(0.0, 50.0, 612.0, 792.0);
        assert!(region.is_valid());
        assert_eq!(region.height(), 50.0);
    }

    #[test]
    fn test_region_invalid() {
        assert!(!Region::new(50.0, 50.0, 612.0, 792.0).is_valid());
        assert!(!Region::new(60.0, 50.0, 612.0, 792.0).is_valid());
        assert!(!Region::new(f32::NAN, 50.0, 612.0, 792.0).is_valid());
        assert!(!Region::new(800.0, 900.0, 612.0, 792.0).is_valid());
        assert!(!Region::new(-20.0, -5.0, 612.0, 792.0).is_valid());
    }

    #[test]
    fn test_contains_span() {
        let region = Region::new(100.0, 200.0, 612.0, 792.0);
        assert!(region.contains_span(100.0, 120.0));
        assert!(region.contains_span(180.0, 200.0));
        assert!(!region.contains_span(90.0, 110.0));
        assert!(!region.contains_span(190.0, 210.0));
    }
}
