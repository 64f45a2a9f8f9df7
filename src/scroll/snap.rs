//! Choosing where a drag comes to rest.

/// Drag velocity (points per second) above which a drag snaps in its
/// direction of travel instead of to the nearest boundary.
pub const DEFAULT_SNAP_VELOCITY_THRESHOLD: f32 = 300.0;

/// Offsets closer than this are treated as the same boundary.
const BOUNDARY_EPSILON: f32 = 0.5;

/// Index of the boundary closest to `offset`. Ties go to the lower index.
pub fn nearest_boundary(boundaries: &[f32], offset: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, boundary) in boundaries.iter().enumerate() {
        let distance = (boundary - offset).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Pick the boundary a drag released at `offset` with `velocity` snaps to.
///
/// `boundaries` are the resting offsets of each pane, in arrangement order
/// and non-decreasing. Positive velocity means the offset was increasing.
/// When `|velocity|` exceeds `threshold` the closest boundary in the
/// direction of travel wins; at or below it the nearest boundary wins.
/// If nothing lies ahead, the nearest boundary wins too.
pub fn snap_target(boundaries: &[f32], offset: f32, velocity: f32, threshold: f32) -> Option<usize> {
    if velocity.abs() <= threshold {
        return nearest_boundary(boundaries, offset);
    }

    let ahead = if velocity > 0.0 {
        boundaries
            .iter()
            .position(|&b| b > offset + BOUNDARY_EPSILON)
    } else {
        // Largest boundary behind the offset; the first pane resting there.
        boundaries
            .iter()
            .rposition(|&b| b < offset - BOUNDARY_EPSILON)
            .map(|last| {
                let value = boundaries[last];
                boundaries
                    .iter()
                    .position(|&b| (b - value).abs() <= BOUNDARY_EPSILON)
                    .unwrap_or(last)
            })
    };

    ahead.or_else(|| nearest_boundary(boundaries, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: [f32; 4] = [0.0, 300.0, 600.0, 900.0];

    #[test]
    fn test_slow_drag_snaps_to_nearest() {
        assert_eq!(snap_target(&PAGES, 140.0, 0.0, 300.0), Some(0));
        assert_eq!(snap_target(&PAGES, 160.0, 0.0, 300.0), Some(1));
        assert_eq!(snap_target(&PAGES, 160.0, -200.0, 300.0), Some(1));
    }

    #[test]
    fn test_fast_drag_snaps_in_direction_of_travel() {
        assert_eq!(snap_target(&PAGES, 20.0, 800.0, 300.0), Some(1));
        assert_eq!(snap_target(&PAGES, 580.0, -800.0, 300.0), Some(1));
        assert_eq!(snap_target(&PAGES, 300.0, 800.0, 300.0), Some(2));
    }

    #[test]
    fn test_velocity_exactly_at_threshold_uses_nearest() {
        assert_eq!(snap_target(&PAGES, 20.0, 300.0, 300.0), Some(0));
        assert_eq!(snap_target(&PAGES, 20.0, -300.0, 300.0), Some(0));
    }

    #[test]
    fn test_nothing_ahead_falls_back_to_nearest() {
        assert_eq!(snap_target(&PAGES, 900.0, 1000.0, 300.0), Some(3));
        assert_eq!(snap_target(&PAGES, 0.0, -1000.0, 300.0), Some(0));
    }

    #[test]
    fn test_equidistant_tie_goes_to_lower_index() {
        assert_eq!(nearest_boundary(&PAGES, 150.0), Some(0));
    }

    #[test]
    fn test_shared_boundary_resolves_to_first_pane() {
        // Trailing panes that cannot scroll further share the last offset
        let boundaries = [0.0, 400.0, 600.0, 600.0];
        assert_eq!(snap_target(&boundaries, 600.0, -800.0, 300.0), Some(1));
        assert_eq!(snap_target(&boundaries, 590.0, 0.0, 300.0), Some(2));
        assert_eq!(snap_target(&boundaries, 450.0, 800.0, 300.0), Some(2));
    }

    #[test]
    fn test_empty_boundaries() {
        assert_eq!(snap_target(&[], 0.0, 1000.0, 300.0), None);
    }
}
