//! Pane containers hosted by the paged scroll surface.

mod hugging;
mod separator;

pub use hugging::HuggingSupport;
pub use separator::{SeparatorStyle, SeparatorView, SEPARATOR_THICKNESS, SHADOW_RADIUS};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::Rect;

/// Opaque handle to a view owned by the host toolkit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ViewHandle(pub u64);

/// Stable identity of a pane across stack changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PaneId(u64);

static NEXT_PANE_ID: AtomicU64 = AtomicU64::new(1);

impl PaneId {
    /// Generate a new unique pane ID
    pub fn next() -> Self {
        PaneId(NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A transparent shell around one content view, with a separator at its
/// trailing edge.
#[derive(Debug, Clone)]
pub struct PaneView {
    id: PaneId,
    content_view: Option<ViewHandle>,
    separator: SeparatorView,
    hugging_progress: f32,
    paging_enabled: bool,
    frame: Rect,
}

impl PaneView {
    pub fn new() -> Self {
        Self {
            id: PaneId::next(),
            content_view: None,
            separator: SeparatorView::default(),
            hugging_progress: 0.0,
            paging_enabled: false,
            frame: Rect::default(),
        }
    }

    pub fn with_content(content: ViewHandle) -> Self {
        let mut pane = Self::new();
        pane.content_view = Some(content);
        pane
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn content_view(&self) -> Option<ViewHandle> {
        self.content_view
    }

    pub fn set_content_view(&mut self, content: Option<ViewHandle>) {
        self.content_view = content;
    }

    pub fn separator(&self) -> &SeparatorView {
        &self.separator
    }

    pub fn separator_mut(&mut self) -> &mut SeparatorView {
        &mut self.separator
    }

    pub fn hugging_progress(&self) -> f32 {
        self.hugging_progress
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    /// Frame in the scroll surface's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Frame of the content view, in the pane's own coordinates. The content
    /// fills the pane; the separator is drawn over it.
    pub fn content_frame(&self) -> Rect {
        Rect::from_size(self.frame.size())
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.separator
            .update(Rect::from_size(frame.size()), self.hugging_progress);
    }
}

impl HuggingSupport for PaneView {
    fn set_hugging_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.hugging_progress = progress;
        self.separator
            .update(Rect::from_size(self.frame.size()), progress);
    }

    fn set_paging_enabled(&mut self, paging_enabled: bool) {
        self.paging_enabled = paging_enabled;
    }
}

impl Default for PaneView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_ids_are_unique() {
        let a = PaneView::new();
        let b = PaneView::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_hugging_progress_is_clamped() {
        let mut pane = PaneView::new();
        pane.set_hugging_progress(3.0);
        assert_eq!(pane.hugging_progress(), 1.0);
        pane.set_hugging_progress(-1.0);
        assert_eq!(pane.hugging_progress(), 0.0);
        pane.set_hugging_progress(f32::NAN);
        assert_eq!(pane.hugging_progress(), 0.0);
    }

    #[test]
    fn test_single_line_separator_fades_while_hugging() {
        let mut pane = PaneView::new();
        pane.set_frame(Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(pane.separator().alpha(), 1.0);
        assert_eq!(pane.separator().frame().x, 400.0 - SEPARATOR_THICKNESS);

        pane.set_hugging_progress(0.5);
        assert_eq!(pane.separator().alpha(), 0.5);
        pane.set_hugging_progress(1.0);
        assert_eq!(pane.separator().alpha(), 0.0);
        assert_eq!(pane.separator().frame().x, 400.0);
    }

    #[test]
    fn test_drop_shadow_separator_fades_in() {
        let mut pane = PaneView::new();
        pane.separator_mut().set_style(SeparatorStyle::DropShadow);
        pane.separator_mut().set_shadow_opacity(0.4);
        pane.set_frame(Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(pane.separator().alpha(), 0.0);

        pane.set_hugging_progress(1.0);
        assert!((pane.separator().alpha() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_paging_flag() {
        let mut pane = PaneView::with_content(ViewHandle(7));
        assert_eq!(pane.content_view(), Some(ViewHandle(7)));
        assert!(!pane.is_paging_enabled());
        pane.set_paging_enabled(true);
        assert!(pane.is_paging_enabled());
    }
}
