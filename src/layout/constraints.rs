/// A range of acceptable widths for a column.
///
/// When the range is inverted (`min > max`) the minimum wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthConstraints {
    pub min: f32,
    pub max: f32,
}

impl WidthConstraints {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `width` into the range. Precedence: minimum, then maximum, then
    /// the requested width.
    pub fn constrain(&self, width: f32) -> f32 {
        width.min(self.max).max(self.min)
    }
}
