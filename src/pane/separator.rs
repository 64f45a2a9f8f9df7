use crate::animation::Animatable;
use crate::geometry::Rect;

/// Width of the separator line, in points.
pub const SEPARATOR_THICKNESS: f32 = 1.0;
/// Width of the shadow cast by a drop-shadow separator, in points.
pub const SHADOW_RADIUS: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    #[default]
    SingleLine,
    DropShadow,
}

/// The separator drawn at the trailing edge of a pane.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorView {
    style: SeparatorStyle,
    shadow_opacity: f32,
    alpha: f32,
    frame: Rect,
}

impl SeparatorView {
    pub fn new(style: SeparatorStyle) -> Self {
        Self {
            style,
            shadow_opacity: 0.25,
            alpha: 1.0,
            frame: Rect::default(),
        }
    }

    pub fn style(&self) -> SeparatorStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SeparatorStyle) {
        self.style = style;
    }

    /// Peak opacity of the drop shadow.
    pub fn shadow_opacity(&self) -> f32 {
        self.shadow_opacity
    }

    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.shadow_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Current opacity after applying hugging progress.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Position the separator against the trailing edge of `pane_bounds`
    /// and interpolate its appearance for `progress`.
    pub(crate) fn update(&mut self, pane_bounds: Rect, progress: f32) {
        let (width, rest_alpha, hugged_alpha) = match self.style {
            SeparatorStyle::SingleLine => (SEPARATOR_THICKNESS, 1.0, 0.0),
            SeparatorStyle::DropShadow => (SHADOW_RADIUS, 0.0, self.shadow_opacity),
        };
        self.alpha = f32::lerp(&rest_alpha, &hugged_alpha, progress);

        let rest = Rect::new(
            pane_bounds.max_x() - width,
            pane_bounds.y,
            width,
            pane_bounds.height,
        );
        let hugged = rest.offset(width, 0.0);
        self.frame = Rect::lerp(&rest, &hugged, progress);
    }
}

impl Default for SeparatorView {
    fn default() -> Self {
        Self::new(SeparatorStyle::SingleLine)
    }
}
