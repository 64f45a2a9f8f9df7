use super::child::ViewControllerRef;
use crate::geometry::Size;
use crate::layout::{ColumnSize, DisplayMode};

/// Callbacks from a [`SplitViewController`](super::SplitViewController).
///
/// The controller holds its delegate weakly. Every method has a default;
/// unclassified children are primary columns.
pub trait SplitViewControllerDelegate {
    fn column_size_for_view_controller(&self, _view_controller: &ViewControllerRef) -> ColumnSize {
        ColumnSize::default()
    }

    /// The display mode is about to change. Work registered on the
    /// coordinator runs with the change and after it completes.
    fn will_change_to_display_mode(
        &self,
        _display_mode: DisplayMode,
        _coordinator: &mut TransitionCoordinator,
    ) {
    }

    fn will_display_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn did_end_displaying_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn will_snap_to_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn did_snap_to_view_controller(&self, _view_controller: &ViewControllerRef) {}
}

/// Listener for stack and display changes.
///
/// Any number of observers can be registered; they are held weakly and
/// notified in registration order, after the delegate.
pub trait SplitViewObserver {
    fn view_controllers_did_change(
        &self,
        _previous: &[ViewControllerRef],
        _current: &[ViewControllerRef],
    ) {
    }

    fn will_display_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn will_snap_to_view_controller(&self, _view_controller: &ViewControllerRef) {}
}

/// Describes a display mode change in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayModeTransition {
    pub from: DisplayMode,
    pub to: DisplayMode,
    pub container_size: Size,
}

type TransitionBlock = Box<dyn FnOnce(&DisplayModeTransition)>;

/// Collects work to run alongside a display mode change.
///
/// Blocks registered with [`animate_alongside`](Self::animate_alongside)
/// run once the new mode is in effect, before panes are laid out again.
/// Completion blocks run after the layout pass.
pub struct TransitionCoordinator {
    transition: DisplayModeTransition,
    alongside: Vec<TransitionBlock>,
    completions: Vec<TransitionBlock>,
}

impl TransitionCoordinator {
    pub(crate) fn new(transition: DisplayModeTransition) -> Self {
        Self {
            transition,
            alongside: Vec::new(),
            completions: Vec::new(),
        }
    }

    pub fn transition(&self) -> &DisplayModeTransition {
        &self.transition
    }

    pub fn animate_alongside(&mut self, block: impl FnOnce(&DisplayModeTransition) + 'static) {
        self.alongside.push(Box::new(block));
    }

    pub fn completion(&mut self, block: impl FnOnce(&DisplayModeTransition) + 'static) {
        self.completions.push(Box::new(block));
    }

    pub(crate) fn run_alongside(&mut self) {
        for block in self.alongside.drain(..) {
            block(&self.transition);
        }
    }

    pub(crate) fn complete(mut self) {
        self.run_alongside();
        for block in self.completions.drain(..) {
            block(&self.transition);
        }
    }
}

impl std::fmt::Debug for TransitionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("transition", &self.transition)
            .field("alongside", &self.alongside.len())
            .field("completions", &self.completions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_coordinator_runs_alongside_before_completion() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut coordinator = TransitionCoordinator::new(DisplayModeTransition {
            from: DisplayMode::SinglePage,
            to: DisplayMode::AllVisible,
            container_size: Size::new(1000.0, 800.0),
        });

        let l = log.clone();
        coordinator.completion(move |t| l.borrow_mut().push(format!("done {:?}", t.to)));
        let l = log.clone();
        coordinator.animate_alongside(move |t| l.borrow_mut().push(format!("along {:?}", t.from)));

        coordinator.run_alongside();
        assert_eq!(*log.borrow(), vec!["along SinglePage"]);

        coordinator.complete();
        assert_eq!(
            *log.borrow(),
            vec!["along SinglePage", "done AllVisible"]
        );
    }
}
