use std::cell::{Cell, RefCell};

use super::{BarItem, BarState, SupplementaryBar};
use crate::controller::ViewControllerRef;

/// Navigation-style header for one child.
///
/// Shows the child's title and a back button titled after the child
/// arranged before it.
pub struct HeaderBar {
    state: BarState,
    title: RefCell<Option<String>>,
    subtitle: RefCell<Option<String>>,
    back_button_title: RefCell<Option<String>>,
    hides_back_button: Cell<bool>,
    displays_large_title: Cell<bool>,
    left_items: RefCell<Vec<BarItem>>,
    right_items: RefCell<Vec<BarItem>>,
}

impl HeaderBar {
    pub(crate) fn new(view_controller: &ViewControllerRef) -> Self {
        Self {
            state: BarState::new(view_controller),
            title: RefCell::new(None),
            subtitle: RefCell::new(None),
            back_button_title: RefCell::new(None),
            hides_back_button: Cell::new(false),
            displays_large_title: Cell::new(false),
            left_items: RefCell::new(Vec::new()),
            right_items: RefCell::new(Vec::new()),
        }
    }

    pub fn view_controller(&self) -> Option<ViewControllerRef> {
        self.state.view_controller()
    }

    /// Explicit title, or the child's own title.
    pub fn title(&self) -> Option<String> {
        self.title
            .borrow()
            .clone()
            .or_else(|| self.view_controller().and_then(|vc| vc.title()))
    }

    pub fn set_title(&self, title: Option<String>) {
        *self.title.borrow_mut() = title;
    }

    pub fn subtitle(&self) -> Option<String> {
        self.subtitle.borrow().clone()
    }

    pub fn set_subtitle(&self, subtitle: Option<String>) {
        *self.subtitle.borrow_mut() = subtitle;
    }

    pub fn shows_back_button(&self) -> bool {
        !self.hides_back_button.get() && self.state.previous().is_some()
    }

    /// Explicit back title, or the title of the preceding child.
    pub fn back_button_title(&self) -> Option<String> {
        if !self.shows_back_button() {
            return None;
        }
        self.back_button_title
            .borrow()
            .clone()
            .or_else(|| self.state.previous().and_then(|vc| vc.title()))
    }

    pub fn set_back_button_title(&self, title: Option<String>) {
        *self.back_button_title.borrow_mut() = title;
    }

    pub fn hides_back_button(&self) -> bool {
        self.hides_back_button.get()
    }

    pub fn set_hides_back_button(&self, hides: bool) {
        self.hides_back_button.set(hides);
    }

    pub fn displays_large_title(&self) -> bool {
        self.displays_large_title.get()
    }

    pub fn set_displays_large_title(&self, large: bool) {
        self.displays_large_title.set(large);
    }

    pub fn left_items(&self) -> Vec<BarItem> {
        self.left_items.borrow().clone()
    }

    pub fn set_left_items(&self, items: Vec<BarItem>) {
        *self.left_items.borrow_mut() = items;
    }

    pub fn right_items(&self) -> Vec<BarItem> {
        self.right_items.borrow().clone()
    }

    pub fn set_right_items(&self, items: Vec<BarItem>) {
        *self.right_items.borrow_mut() = items;
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    pub fn has_displayed(&self) -> bool {
        self.state.is_displayed()
    }

    /// Whether the child was the target of the last snap.
    pub fn is_snapped(&self) -> bool {
        self.state.is_snapped()
    }
}

impl SupplementaryBar for HeaderBar {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewController;
    use crate::pane::ViewHandle;
    use std::rc::Rc;

    struct Titled(&'static str);

    impl ViewController for Titled {
        fn view(&self) -> ViewHandle {
            ViewHandle(0)
        }

        fn title(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_back_button_follows_previous_child() {
        let inbox: ViewControllerRef = Rc::new(Titled("Inbox"));
        let message: ViewControllerRef = Rc::new(Titled("Message"));
        let bar = HeaderBar::new(&message);

        assert_eq!(bar.title().as_deref(), Some("Message"));
        assert!(!bar.shows_back_button());

        bar.view_controllers_did_change(&[inbox.clone(), message.clone()]);
        assert_eq!(bar.back_button_title().as_deref(), Some("Inbox"));

        bar.set_hides_back_button(true);
        assert_eq!(bar.back_button_title(), None);

        bar.set_hides_back_button(false);
        bar.view_controllers_did_change(&[message.clone()]);
        assert!(!bar.shows_back_button());
    }

    #[test]
    fn test_explicit_titles_win() {
        let inbox: ViewControllerRef = Rc::new(Titled("Inbox"));
        let message: ViewControllerRef = Rc::new(Titled("Message"));
        let bar = HeaderBar::new(&message);
        bar.view_controllers_did_change(&[inbox, message]);

        bar.set_title(Some("Re: lunch".into()));
        bar.set_back_button_title(Some("Back".into()));
        assert_eq!(bar.title().as_deref(), Some("Re: lunch"));
        assert_eq!(bar.back_button_title().as_deref(), Some("Back"));
    }

    #[test]
    fn test_snap_tracking() {
        let a: ViewControllerRef = Rc::new(Titled("A"));
        let b: ViewControllerRef = Rc::new(Titled("B"));
        let bar = HeaderBar::new(&a);

        bar.will_snap_to_view_controller(&a);
        assert!(bar.is_snapped());
        bar.will_snap_to_view_controller(&b);
        assert!(!bar.is_snapped());
    }
}
