//! Column width resolution.
//!
//! Given the container width and the column classification of every child,
//! this module decides the display mode and the concrete width of each pane.
//! Multiple primary-sized children share the primary column slot and are
//! scrolled through horizontally; they do not each raise the space required
//! for showing everything side by side.

use super::constraints::WidthConstraints;

/// Fraction of the container width used for the primary column when no
/// preferred fraction is configured.
pub const AUTOMATIC_PRIMARY_COLUMN_WIDTH_FRACTION: f32 = 0.38;

/// Preferred size of the column hosting a child view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnSize {
    /// The master column; drives the secondary column.
    #[default]
    Primary,
    /// The detail column; fills the remaining width.
    Secondary,
    /// A third column next to a secondary one, carved out of its width when
    /// there is room. Otherwise laid out like a primary column.
    Auxiliary,
    /// Covers the whole container.
    Fullscreen,
}

/// Arrangement of the split interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Pick from available space. Only meaningful as a preference; it is
    /// never reported as the current mode.
    #[default]
    Automatic,
    /// One pane at a time.
    SinglePage,
    /// Panes side by side.
    AllVisible,
}

/// Width limits that feed column resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMetrics {
    pub preferred_primary_fraction: f32,
    pub primary: WidthConstraints,
    pub minimum_secondary: f32,
}

impl ColumnMetrics {
    /// Width of the primary column for a container `width` wide.
    pub fn primary_width(&self, width: f32) -> f32 {
        let fraction = self.preferred_primary_fraction.clamp(0.0, 1.0);
        self.primary.constrain(fraction * width)
    }

    /// Width the container must have to show primary and secondary columns
    /// side by side.
    pub fn required_width(&self, sizes: &[ColumnSize]) -> f32 {
        let needs_primary = sizes
            .iter()
            .any(|s| matches!(s, ColumnSize::Primary | ColumnSize::Auxiliary));
        let needs_secondary = sizes.contains(&ColumnSize::Secondary);

        let mut required = 0.0;
        if needs_primary {
            required += self.primary.min;
        }
        if needs_secondary {
            required += self.minimum_secondary;
        }
        required
    }
}

/// A column after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColumn {
    /// Classification the child asked for
    pub requested: ColumnSize,
    /// Classification after degradation (auxiliary may become primary)
    pub effective: ColumnSize,
    /// Width of the pane in points
    pub width: f32,
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Never [`DisplayMode::Automatic`]
    pub display_mode: DisplayMode,
    /// Resolved primary column width, inside the configured range
    pub primary_width: f32,
    /// Resolved secondary column width, at least the configured minimum
    pub secondary_width: f32,
    /// One entry per child, in order
    pub columns: Vec<ResolvedColumn>,
}

impl ColumnLayout {
    pub fn widths(&self) -> impl Iterator<Item = f32> + '_ {
        self.columns.iter().map(|c| c.width)
    }
}

/// Resolve display mode and pane widths.
///
/// `snapped` is the index of the currently snapped child; a snapped
/// fullscreen child forces single-page display.
pub fn resolve_columns(
    width: f32,
    sizes: &[ColumnSize],
    snapped: Option<usize>,
    preferred: DisplayMode,
    metrics: &ColumnMetrics,
) -> ColumnLayout {
    let width = width.max(0.0);
    let mut primary = metrics.primary_width(width);
    let mut secondary = (width - primary).max(metrics.minimum_secondary);

    let mut mode = choose_display_mode(width, sizes, snapped, preferred, metrics);

    if mode == DisplayMode::AllVisible && sizes.contains(&ColumnSize::Secondary) {
        // Give the secondary column its minimum by shrinking the primary
        // column, but never below the primary minimum.
        if width - primary < metrics.minimum_secondary {
            primary = (width - metrics.minimum_secondary).max(metrics.primary.min);
            secondary = (width - primary).max(metrics.minimum_secondary);
        }
        if primary + secondary > width {
            log::debug!(
                "Secondary column ({}) does not fit next to primary ({}) in {}",
                secondary,
                primary,
                width
            );
            mode = DisplayMode::SinglePage;
        }
    }

    let columns = match mode {
        DisplayMode::AllVisible => side_by_side(width, sizes, primary, secondary, metrics),
        _ => sizes
            .iter()
            .map(|&requested| ResolvedColumn {
                requested,
                effective: degrade(requested),
                width,
            })
            .collect(),
    };

    ColumnLayout {
        display_mode: mode,
        primary_width: primary,
        secondary_width: secondary,
        columns,
    }
}

fn choose_display_mode(
    width: f32,
    sizes: &[ColumnSize],
    snapped: Option<usize>,
    preferred: DisplayMode,
    metrics: &ColumnMetrics,
) -> DisplayMode {
    if preferred == DisplayMode::SinglePage {
        return DisplayMode::SinglePage;
    }
    let snapped_fullscreen = snapped
        .and_then(|i| sizes.get(i))
        .map_or(false, |s| *s == ColumnSize::Fullscreen);
    if snapped_fullscreen {
        return DisplayMode::SinglePage;
    }
    if width >= metrics.required_width(sizes) {
        DisplayMode::AllVisible
    } else {
        DisplayMode::SinglePage
    }
}

fn degrade(size: ColumnSize) -> ColumnSize {
    match size {
        ColumnSize::Auxiliary => ColumnSize::Primary,
        other => other,
    }
}

fn side_by_side(
    width: f32,
    sizes: &[ColumnSize],
    primary: f32,
    secondary: f32,
    metrics: &ColumnMetrics,
) -> Vec<ResolvedColumn> {
    let has_primary_slot = sizes
        .iter()
        .any(|s| matches!(s, ColumnSize::Primary | ColumnSize::Auxiliary));
    let secondary = if has_primary_slot { secondary } else { width };

    let mut columns: Vec<ResolvedColumn> = sizes
        .iter()
        .map(|&requested| ResolvedColumn {
            requested,
            effective: requested,
            width: match requested {
                ColumnSize::Primary | ColumnSize::Auxiliary => primary,
                ColumnSize::Secondary => secondary,
                ColumnSize::Fullscreen => width,
            },
        })
        .collect();

    // Each secondary column lends to at most one auxiliary neighbour,
    // preferring the one in front of it.
    let mut lent = vec![false; columns.len()];
    for i in 0..columns.len() {
        if columns[i].requested != ColumnSize::Auxiliary {
            continue;
        }
        let lender = [i.checked_sub(1), Some(i + 1)]
            .into_iter()
            .flatten()
            .filter(|&j| j < columns.len())
            .find(|&j| columns[j].requested == ColumnSize::Secondary && !lent[j]);

        match lender {
            Some(j) if columns[j].width - primary >= metrics.minimum_secondary => {
                columns[j].width -= primary;
                lent[j] = true;
            }
            _ => {
                log::debug!("Auxiliary column {} has no room, laid out as primary", i);
                columns[i].effective = ColumnSize::Primary;
            }
        }
    }

    columns
}
