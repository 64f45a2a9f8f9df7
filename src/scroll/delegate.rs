use crate::geometry::Size;
use crate::pane::PaneId;

/// Callbacks from a [`PagedScrollSurface`](super::PagedScrollSurface).
///
/// Every method has a default, so implementors only override what they
/// need. The surface borrows its delegate for the duration of each call
/// instead of holding on to it; `()` is the empty delegate.
pub trait ScrollSurfaceDelegate {
    /// Size of the pane at `index`. `None` falls back to the surface bounds.
    fn size_for_pane(&mut self, _pane: PaneId, _index: usize, _bounds: Size) -> Option<Size> {
        None
    }

    /// A pane is about to come on screen.
    fn will_display_pane(&mut self, _pane: PaneId, _index: usize) {}

    /// A pane went off screen.
    fn did_end_displaying_pane(&mut self, _pane: PaneId, _index: usize) {}

    /// The surface is about to snap to a pane.
    fn will_snap_to_pane(&mut self, _pane: PaneId, _index: usize) {}

    /// The surface finished snapping to a pane.
    fn did_snap_to_pane(&mut self, _pane: PaneId, _index: usize) {}
}

impl ScrollSurfaceDelegate for () {}
