//! Rounded-corner mask drawn above the split interface.

use bitflags::bitflags;

use crate::geometry::Rect;

pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

bitflags! {
    /// Corners of the container that get rounded
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Corners: u8 {
        const TOP_LEFT     = 0b0001;
        const TOP_RIGHT    = 0b0010;
        const BOTTOM_LEFT  = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

/// Overlay that masks the container's corners. It never takes input.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedCornerOverlay {
    frame: Rect,
    corners: Corners,
    radius: f32,
}

impl RoundedCornerOverlay {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            corners: Corners::all(),
            radius: DEFAULT_CORNER_RADIUS,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn corners(&self) -> Corners {
        self.corners
    }

    pub fn set_corners(&mut self, corners: Corners) {
        self.corners = corners;
    }

    /// Radius actually drawn: never more than half the shorter side.
    pub fn radius(&self) -> f32 {
        let limit = self.frame.width.min(self.frame.height) / 2.0;
        self.radius.min(limit.max(0.0))
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    pub fn is_rounded(&self, corner: Corners) -> bool {
        self.corners.contains(corner) && self.radius() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_corners_by_default() {
        let overlay = RoundedCornerOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(overlay.is_rounded(Corners::TOP_LEFT));
        assert!(overlay.is_rounded(Corners::BOTTOM));
        assert_eq!(overlay.radius(), DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn test_radius_limited_by_frame() {
        let mut overlay = RoundedCornerOverlay::new(Rect::new(0.0, 0.0, 12.0, 600.0));
        overlay.set_radius(40.0);
        assert_eq!(overlay.radius(), 6.0);

        overlay.set_frame(Rect::default());
        assert!(!overlay.is_rounded(Corners::TOP_LEFT));
    }

    #[test]
    fn test_selected_corners() {
        let mut overlay = RoundedCornerOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        overlay.set_corners(Corners::TOP);
        assert!(overlay.is_rounded(Corners::TOP_RIGHT));
        assert!(!overlay.is_rounded(Corners::BOTTOM_RIGHT));
    }
}
