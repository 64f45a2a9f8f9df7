use std::cell::RefCell;

use super::{item_widths, BarItem, BarState, SupplementaryBar};
use crate::controller::ViewControllerRef;

/// Toolbar-style footer for one child.
pub struct FooterBar {
    state: BarState,
    items: RefCell<Vec<BarItem>>,
}

impl FooterBar {
    pub(crate) fn new(view_controller: &ViewControllerRef) -> Self {
        Self {
            state: BarState::new(view_controller),
            items: RefCell::new(Vec::new()),
        }
    }

    pub fn view_controller(&self) -> Option<ViewControllerRef> {
        self.state.view_controller()
    }

    pub fn items(&self) -> Vec<BarItem> {
        self.items.borrow().clone()
    }

    pub fn set_items(&self, items: Vec<BarItem>) {
        *self.items.borrow_mut() = items;
    }

    /// Widths of the items across a footer `available` points wide.
    pub fn item_widths(&self, available: f32, button_width: f32) -> Vec<f32> {
        item_widths(&self.items.borrow(), available, button_width)
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    pub fn has_displayed(&self) -> bool {
        self.state.is_displayed()
    }

    pub fn is_snapped(&self) -> bool {
        self.state.is_snapped()
    }
}

impl SupplementaryBar for FooterBar {
    fn did_move_to_controller(&self) {
        self.state.set_attached(true);
    }

    fn will_move_from_controller(&self) {
        self.state.set_attached(false);
    }

    fn will_display_view_controller(&self, view_controller: &ViewControllerRef) {
        self.state.will_display(view_controller);
    }

    fn will_snap_to_view_controller(&self, view_controller: &ViewControllerRef) {
        self.state.will_snap(view_controller);
    }

    fn view_controllers_did_change(&self, stack: &[ViewControllerRef]) {
        self.state.stack_did_change(stack);
    }
}
