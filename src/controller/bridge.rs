use std::rc::Rc;

use super::child::{ViewControllerEntry, ViewControllerRef, Visibility};
use super::delegate::{SplitViewControllerDelegate, SplitViewObserver};
use crate::bars::SupplementaryBars;
use crate::geometry::Size;
use crate::observer::ObserverSet;
use crate::pane::PaneId;
use crate::scroll::ScrollSurfaceDelegate;

/// Translates surface callbacks about panes into callbacks about children.
///
/// Borrows the controller's parts for the length of one surface call. Child
/// bookkeeping runs first, then the delegate, the observers and the bars.
pub(super) struct SurfaceBridge<'a> {
    pub(super) entries: &'a mut [ViewControllerEntry],
    pub(super) delegate: Option<Rc<dyn SplitViewControllerDelegate>>,
    pub(super) observers: &'a mut ObserverSet<dyn SplitViewObserver>,
    pub(super) bars: &'a mut SupplementaryBars,
    /// Set when a snap completed during the call
    pub(super) did_snap: bool,
}

impl SurfaceBridge<'_> {
    fn entry(&mut self, pane: PaneId, index: usize) -> Option<&mut ViewControllerEntry> {
        // Surface and entry order agree; fall back to a search otherwise
        if self.entries.get(index).map_or(false, |e| e.pane == pane) {
            return self.entries.get_mut(index);
        }
        self.entries.iter_mut().find(|e| e.pane == pane)
    }

    fn controller(&self, pane: PaneId) -> Option<ViewControllerRef> {
        self.entries
            .iter()
            .find(|e| e.pane == pane)
            .map(|e| e.controller.clone())
    }
}

impl ScrollSurfaceDelegate for SurfaceBridge<'_> {
    fn size_for_pane(&mut self, pane: PaneId, index: usize, bounds: Size) -> Option<Size> {
        self.entry(pane, index)
            .map(|entry| Size::new(entry.width, bounds.height))
    }

    fn will_display_pane(&mut self, pane: PaneId, index: usize) {
        let Some(entry) = self.entry(pane, index) else {
            return;
        };
        entry.visibility = Visibility::Displayed;
        let controller = entry.controller.clone();
        controller.view_will_appear();

        if let Some(delegate) = &self.delegate {
            delegate.will_display_view_controller(&controller);
        }
        self.observers
            .for_each(|o| o.will_display_view_controller(&controller));
        self.bars.will_display(&controller);
    }

    fn did_end_displaying_pane(&mut self, pane: PaneId, index: usize) {
        let Some(entry) = self.entry(pane, index) else {
            return;
        };
        entry.visibility = Visibility::Hidden;
        let controller = entry.controller.clone();
        controller.view_did_disappear();

        if let Some(delegate) = &self.delegate {
            delegate.did_end_displaying_view_controller(&controller);
        }
    }

    fn will_snap_to_pane(&mut self, pane: PaneId, _index: usize) {
        let Some(controller) = self.controller(pane) else {
            return;
        };
        if let Some(delegate) = &self.delegate {
            delegate.will_snap_to_view_controller(&controller);
        }
        self.observers
            .for_each(|o| o.will_snap_to_view_controller(&controller));
        self.bars.will_snap(&controller);
    }

    fn did_snap_to_pane(&mut self, pane: PaneId, _index: usize) {
        let Some(controller) = self.controller(pane) else {
            return;
        };
        self.did_snap = true;
        if let Some(delegate) = &self.delegate {
            delegate.did_snap_to_view_controller(&controller);
        }
    }
}
