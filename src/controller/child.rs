use std::rc::Rc;

use crate::layout::ColumnSize;
use crate::pane::{PaneId, ViewHandle};

/// A child hosted by the split controller.
///
/// The controller only needs the child's view and tells it when it is
/// attached, detached, shown and hidden. Every callback defaults to doing
/// nothing. Callbacks must not call back into the controller.
pub trait ViewController {
    /// The view placed inside the child's pane.
    fn view(&self) -> ViewHandle;

    /// Title shown by supplementary header bars.
    fn title(&self) -> Option<String> {
        None
    }

    /// Called before the child is attached (`true`) or detached (`false`).
    fn will_move_to_parent(&self, _attached: bool) {}

    /// Called after the child was attached (`true`) or detached (`false`).
    fn did_move_to_parent(&self, _attached: bool) {}

    /// The child's view is about to come on screen.
    fn view_will_appear(&self) {}

    /// The child's view left the screen.
    fn view_did_disappear(&self) {}
}

/// Shared handle to a child. Identity is the handle's address.
pub type ViewControllerRef = Rc<dyn ViewController>;

/// Whether two handles point at the same child.
pub fn same_view_controller(a: &ViewControllerRef, b: &ViewControllerRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Displayed,
}

/// Book-keeping for one child of the split controller.
pub struct ViewControllerEntry {
    pub(crate) controller: ViewControllerRef,
    pub(crate) column: ColumnSize,
    pub(crate) effective_column: ColumnSize,
    pub(crate) width: f32,
    pub(crate) visibility: Visibility,
    pub(crate) pane: PaneId,
}

impl ViewControllerEntry {
    pub(crate) fn new(controller: ViewControllerRef, column: ColumnSize, pane: PaneId) -> Self {
        Self {
            controller,
            column,
            effective_column: column,
            width: 0.0,
            visibility: Visibility::Hidden,
            pane,
        }
    }

    pub fn view_controller(&self) -> &ViewControllerRef {
        &self.controller
    }

    /// Classification reported by the delegate.
    pub fn column_size(&self) -> ColumnSize {
        self.column
    }

    /// Classification after layout; auxiliary columns without room report
    /// [`ColumnSize::Primary`].
    pub fn effective_column_size(&self) -> ColumnSize {
        self.effective_column
    }

    /// Width assigned by the last layout pass.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn pane(&self) -> PaneId {
        self.pane
    }

    pub(crate) fn is(&self, controller: &ViewControllerRef) -> bool {
        same_view_controller(&self.controller, controller)
    }
}
