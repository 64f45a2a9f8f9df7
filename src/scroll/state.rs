use crate::animation::ScrollTarget;

/// Horizontal scroll state of a paged surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ScrollState {
    /// Current scroll offset in X direction
    pub offset_x: f32,
    /// Width of the arranged content (computed during layout)
    pub content_width: f32,
    /// Viewport size (surface bounds)
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl ScrollState {
    /// Get the maximum scroll offset in X direction
    pub fn max_scroll_x(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Clamp an offset to the valid range
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll_x())
    }

    /// Clamp the current offset to the valid range
    pub fn clamp_offset(&mut self) {
        self.offset_x = self.clamp(self.offset_x);
    }
}

impl ScrollTarget for ScrollState {
    fn set_content_offset(&mut self, offset: f32) {
        self.offset_x = offset;
    }
}
