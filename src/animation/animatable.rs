use crate::geometry::Rect;

/// Values that can be interpolated for transitions.
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation: `t = 0` gives `from`, `t = 1` gives `to`.
    /// Values outside `0..=1` extrapolate.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Rect {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Rect {
            x: f32::lerp(&from.x, &to.x, t),
            y: f32::lerp(&from.y, &to.y, t),
            width: f32::lerp(&from.width, &to.width, t),
            height: f32::lerp(&from.height, &to.height, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fading_opacity() {
        // Separator line fading out, drop shadow fading in to its peak
        assert_eq!(f32::lerp(&1.0, &0.0, 0.25), 0.75);
        assert_eq!(f32::lerp(&0.0, &0.25, 1.0), 0.25);
        assert!((f32::lerp(&0.0, &0.25, 0.4) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_separator_frame_slides_by_its_width() {
        let rest = Rect::new(392.0, 0.0, 8.0, 800.0);
        let hugged = rest.offset(8.0, 0.0);
        assert_eq!(Rect::lerp(&rest, &hugged, 0.5), Rect::new(396.0, 0.0, 8.0, 800.0));
        assert_eq!(Rect::lerp(&rest, &hugged, 1.0), hugged);
    }
}
