use crate::animation::SpringConfig;
use crate::layout::{
    ColumnMetrics, DisplayMode, WidthConstraints, AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION,
};
use crate::scroll::DEFAULT_SNAP_VELOCITY_THRESHOLD;

pub const DEFAULT_MINIMUM_PRIMARY_COLUMN_WIDTH: f32 = 320.0;
pub const DEFAULT_MAXIMUM_PRIMARY_COLUMN_WIDTH: f32 = 400.0;
pub const DEFAULT_MINIMUM_SECONDARY_COLUMN_WIDTH: f32 = 410.0;

/// Configuration of a [`SplitViewController`](super::SplitViewController).
///
/// Dimensions left as `None` use the automatic defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub preferred_display_mode: DisplayMode,
    pub preferred_primary_column_width_fraction: Option<f32>,
    pub minimum_primary_column_width: Option<f32>,
    pub maximum_primary_column_width: Option<f32>,
    pub minimum_secondary_column_width: Option<f32>,
    pub includes_rounded_corners_overlay: bool,
    pub interactive_gestures_disabled: bool,
    pub snap_spring: SpringConfig,
    pub snap_velocity_threshold: f32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            preferred_display_mode: DisplayMode::Automatic,
            preferred_primary_column_width_fraction: None,
            minimum_primary_column_width: None,
            maximum_primary_column_width: None,
            minimum_secondary_column_width: None,
            includes_rounded_corners_overlay: true,
            interactive_gestures_disabled: false,
            snap_spring: SpringConfig::SNAP,
            snap_velocity_threshold: DEFAULT_SNAP_VELOCITY_THRESHOLD,
        }
    }
}

impl SplitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferred_display_mode(mut self, mode: DisplayMode) -> Self {
        self.preferred_display_mode = mode;
        self
    }

    pub fn preferred_primary_column_width_fraction(mut self, fraction: f32) -> Self {
        self.preferred_primary_column_width_fraction = Some(fraction);
        self
    }

    pub fn minimum_primary_column_width(mut self, width: f32) -> Self {
        self.minimum_primary_column_width = Some(width);
        self
    }

    pub fn maximum_primary_column_width(mut self, width: f32) -> Self {
        self.maximum_primary_column_width = Some(width);
        self
    }

    pub fn minimum_secondary_column_width(mut self, width: f32) -> Self {
        self.minimum_secondary_column_width = Some(width);
        self
    }

    pub fn includes_rounded_corners_overlay(mut self, enabled: bool) -> Self {
        self.includes_rounded_corners_overlay = enabled;
        self
    }

    pub fn interactive_gestures_disabled(mut self, disabled: bool) -> Self {
        self.interactive_gestures_disabled = disabled;
        self
    }

    pub fn snap_spring(mut self, spring: SpringConfig) -> Self {
        self.snap_spring = spring;
        self
    }

    pub fn snap_velocity_threshold(mut self, threshold: f32) -> Self {
        self.snap_velocity_threshold = threshold;
        self
    }

    /// Preferred primary fraction, clamped to `0..=1`.
    pub fn resolved_primary_column_width_fraction(&self) -> f32 {
        self.preferred_primary_column_width_fraction
            .filter(|f| f.is_finite())
            .unwrap_or(AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION)
            .clamp(0.0, 1.0)
    }

    pub fn resolved_minimum_primary_column_width(&self) -> f32 {
        resolve(
            self.minimum_primary_column_width,
            DEFAULT_MINIMUM_PRIMARY_COLUMN_WIDTH,
        )
    }

    pub fn resolved_maximum_primary_column_width(&self) -> f32 {
        resolve(
            self.maximum_primary_column_width,
            DEFAULT_MAXIMUM_PRIMARY_COLUMN_WIDTH,
        )
    }

    pub fn resolved_minimum_secondary_column_width(&self) -> f32 {
        resolve(
            self.minimum_secondary_column_width,
            DEFAULT_MINIMUM_SECONDARY_COLUMN_WIDTH,
        )
    }

    pub(crate) fn column_metrics(&self) -> ColumnMetrics {
        ColumnMetrics {
            preferred_primary_fraction: self.resolved_primary_column_width_fraction(),
            primary: WidthConstraints::new(
                self.resolved_minimum_primary_column_width(),
                self.resolved_maximum_primary_column_width(),
            ),
            minimum_secondary: self.resolved_minimum_secondary_column_width(),
        }
    }
}

fn resolve(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitConfig::default();
        assert_eq!(config.preferred_display_mode, DisplayMode::Automatic);
        assert_eq!(config.resolved_minimum_primary_column_width(), 320.0);
        assert_eq!(config.resolved_maximum_primary_column_width(), 400.0);
        assert_eq!(config.resolved_minimum_secondary_column_width(), 410.0);
        assert_eq!(
            config.resolved_primary_column_width_fraction(),
            AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION
        );
        assert!(config.includes_rounded_corners_overlay);
        assert!(!config.interactive_gestures_disabled);
    }

    #[test]
    fn test_builder() {
        let config = SplitConfig::new()
            .preferred_primary_column_width_fraction(0.4)
            .minimum_primary_column_width(300.0)
            .maximum_primary_column_width(500.0)
            .minimum_secondary_column_width(200.0);
        let metrics = config.column_metrics();
        assert_eq!(metrics.preferred_primary_fraction, 0.4);
        assert_eq!(metrics.primary, WidthConstraints::new(300.0, 500.0));
        assert_eq!(metrics.minimum_secondary, 200.0);
    }

    #[test]
    fn test_invalid_dimensions_fall_back_to_defaults() {
        let config = SplitConfig::new()
            .preferred_primary_column_width_fraction(f32::NAN)
            .minimum_primary_column_width(-5.0)
            .maximum_primary_column_width(f32::INFINITY);
        assert_eq!(
            config.resolved_primary_column_width_fraction(),
            AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION
        );
        assert_eq!(config.resolved_minimum_primary_column_width(), 320.0);
        assert_eq!(config.resolved_maximum_primary_column_width(), 400.0);

        let config = SplitConfig::new().preferred_primary_column_width_fraction(4.0);
        assert_eq!(config.resolved_primary_column_width_fraction(), 1.0);
    }
}
