//! The split view controller.
//!
//! Children are arranged as panes on a [`PagedScrollSurface`]. Each layout
//! pass classifies the children into columns, resolves the display mode and
//! column widths, and hands the widths to the surface. Surface callbacks
//! about panes are translated into callbacks about children.

mod bridge;
mod child;
mod config;
mod delegate;

pub use child::{
    same_view_controller, ViewController, ViewControllerEntry, ViewControllerRef, Visibility,
};
pub use config::{
    SplitConfig, DEFAULT_MAXIMUM_PRIMARY_COLUMN_WIDTH, DEFAULT_MINIMUM_PRIMARY_COLUMN_WIDTH,
    DEFAULT_MINIMUM_SECONDARY_COLUMN_WIDTH,
};
pub use delegate::{
    DisplayModeTransition, SplitViewControllerDelegate, SplitViewObserver, TransitionCoordinator,
};

use std::rc::{Rc, Weak};

use bridge::SurfaceBridge;

use crate::animation::SpringConfig;
use crate::bars::{BarSeed, FooterBar, HeaderBar, SupplementaryBars};
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::layout::{resolve_columns, ColumnLayout, ColumnSize, DisplayMode};
use crate::observer::ObserverSet;
use crate::overlay::RoundedCornerOverlay;
use crate::pane::{HuggingSupport, PaneId, PaneView, SeparatorStyle};
use crate::scroll::PagedScrollSurface;

/// Container that pages through its children horizontally and shows as many
/// of them side by side as the width allows.
///
/// Everything runs on one thread. Callbacks into children, the delegate,
/// observers and bars happen synchronously and must not call back into the
/// controller.
pub struct SplitViewController {
    config: SplitConfig,
    entries: Vec<ViewControllerEntry>,
    surface: PagedScrollSurface,
    display_mode: DisplayMode,
    column_layout: Option<ColumnLayout>,
    bounds: Size,
    delegate: Option<Weak<dyn SplitViewControllerDelegate>>,
    observers: ObserverSet<dyn SplitViewObserver>,
    bars: SupplementaryBars,
    overlay: Option<RoundedCornerOverlay>,
}

impl SplitViewController {
    pub fn new() -> Self {
        Self::with_config(SplitConfig::default())
    }

    /// Create a controller. A snap spring that fails validation is replaced
    /// by [`SpringConfig::SNAP`].
    pub fn with_config(mut config: SplitConfig) -> Self {
        let mut surface = PagedScrollSurface::new();
        if let Err(err) = surface.set_spring_config(config.snap_spring) {
            log::warn!("Invalid snap spring, using default: {}", err);
            config.snap_spring = SpringConfig::SNAP;
        }
        surface.set_snap_velocity_threshold(config.snap_velocity_threshold);

        Self {
            config,
            entries: Vec::new(),
            surface,
            display_mode: DisplayMode::SinglePage,
            column_layout: None,
            bounds: Size::zero(),
            delegate: None,
            observers: ObserverSet::new(),
            bars: SupplementaryBars::default(),
            overlay: None,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Replace the whole configuration and lay out again.
    pub fn set_config(&mut self, config: SplitConfig) -> Result<()> {
        config.snap_spring.validate()?;
        self.surface.set_spring_config(config.snap_spring)?;
        self.surface
            .set_snap_velocity_threshold(config.snap_velocity_threshold);
        self.config = config;
        self.set_needs_layout();
        Ok(())
    }

    pub fn set_preferred_display_mode(&mut self, mode: DisplayMode) {
        self.config.preferred_display_mode = mode;
        self.set_needs_layout();
    }

    pub fn set_preferred_primary_column_width_fraction(&mut self, fraction: Option<f32>) {
        self.config.preferred_primary_column_width_fraction = fraction;
        self.set_needs_layout();
    }

    pub fn set_minimum_primary_column_width(&mut self, width: Option<f32>) {
        self.config.minimum_primary_column_width = width;
        self.set_needs_layout();
    }

    pub fn set_maximum_primary_column_width(&mut self, width: Option<f32>) {
        self.config.maximum_primary_column_width = width;
        self.set_needs_layout();
    }

    pub fn set_minimum_secondary_column_width(&mut self, width: Option<f32>) {
        self.config.minimum_secondary_column_width = width;
        self.set_needs_layout();
    }

    pub fn set_includes_rounded_corners_overlay(&mut self, enabled: bool) {
        self.config.includes_rounded_corners_overlay = enabled;
        self.update_overlay();
    }

    /// Disabled gestures are ignored; programmatic scrolling still works.
    pub fn set_interactive_gestures_disabled(&mut self, disabled: bool) {
        self.config.interactive_gestures_disabled = disabled;
        if disabled && self.surface.is_dragging() {
            self.with_surface(|surface, bridge| surface.end_drag(0.0, bridge));
        }
    }

    pub fn set_snap_spring(&mut self, spring: SpringConfig) -> Result<()> {
        self.surface.set_spring_config(spring)?;
        self.config.snap_spring = spring;
        Ok(())
    }

    pub fn delegate(&self) -> Option<Rc<dyn SplitViewControllerDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Set the delegate, held weakly, and reclassify every child.
    pub fn set_delegate(&mut self, delegate: Option<&Rc<dyn SplitViewControllerDelegate>>) {
        self.delegate = delegate.map(Rc::downgrade);
        self.reload_column_sizes();
    }

    pub fn add_observer(&mut self, observer: &Rc<dyn SplitViewObserver>) {
        self.observers.add(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn SplitViewObserver>) {
        self.observers.remove(observer);
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    pub fn view_controllers(&self) -> Vec<ViewControllerRef> {
        self.entries.iter().map(|e| e.controller.clone()).collect()
    }

    pub fn entries(&self) -> &[ViewControllerEntry] {
        &self.entries
    }

    pub fn entry_for(&self, view_controller: &ViewControllerRef) -> Option<&ViewControllerEntry> {
        self.entries.iter().find(|e| e.is(view_controller))
    }

    pub fn contains(&self, view_controller: &ViewControllerRef) -> bool {
        self.entry_for(view_controller).is_some()
    }

    /// Replace the stack of children.
    ///
    /// Children present before and after keep their panes and column
    /// classification. Repeated children are ignored after their first
    /// occurrence. The snapped child stays snapped when it survives;
    /// otherwise the closest surviving child before it is snapped, falling
    /// back to the first child.
    pub fn set_view_controllers(&mut self, view_controllers: Vec<ViewControllerRef>) {
        let mut unique: Vec<ViewControllerRef> = Vec::with_capacity(view_controllers.len());
        for view_controller in view_controllers {
            if unique
                .iter()
                .any(|vc| same_view_controller(vc, &view_controller))
            {
                log::warn!("Ignoring repeated child in split view controller stack");
                continue;
            }
            unique.push(view_controller);
        }

        let previous = self.view_controllers();
        let previous_snapped = self.snapped_index();
        let delegate = self.delegate();

        let mut old_entries = std::mem::take(&mut self.entries);
        let mut old_panes = self.surface.take_panes();
        let mut panes = Vec::with_capacity(unique.len());
        let mut added = Vec::new();

        for view_controller in &unique {
            if let Some(position) = old_entries.iter().position(|e| e.is(view_controller)) {
                let entry = old_entries.remove(position);
                let pane = match old_panes.iter().position(|p| p.id() == entry.pane) {
                    Some(index) => old_panes.remove(index),
                    None => PaneView::with_content(view_controller.view()),
                };
                let mut entry = entry;
                entry.pane = pane.id();
                self.entries.push(entry);
                panes.push(pane);
            } else {
                view_controller.will_move_to_parent(true);
                let column = classify(delegate.as_deref(), view_controller);
                let pane = PaneView::with_content(view_controller.view());
                self.entries.push(ViewControllerEntry::new(
                    view_controller.clone(),
                    column,
                    pane.id(),
                ));
                panes.push(pane);
                added.push(view_controller.clone());
            }
        }

        for entry in old_entries {
            let controller = entry.controller;
            if entry.visibility == Visibility::Displayed {
                controller.view_did_disappear();
            }
            controller.will_move_to_parent(false);
            self.bars.remove(&controller);
            controller.did_move_to_parent(false);
        }

        let snapped = self.surviving_snap(&previous, previous_snapped);
        self.surface.preselect(snapped);

        log::debug!(
            "Split view stack changed: {} -> {} children ({} added)",
            previous.len(),
            self.entries.len(),
            added.len()
        );

        let coordinator = self.update_columns();
        let paging = self.display_mode == DisplayMode::SinglePage;
        for pane in panes.iter_mut() {
            configure_pane(pane, paging);
        }
        for view_controller in &added {
            view_controller.did_move_to_parent(true);
        }

        self.with_surface(|surface, bridge| surface.set_panes(panes, bridge));
        self.update_overlay();
        if let Some(coordinator) = coordinator {
            coordinator.complete();
        }

        let current = self.view_controllers();
        self.bars.view_controllers_did_change(&current);
        self.observers
            .for_each(|o| o.view_controllers_did_change(&previous, &current));
    }

    /// Ask the delegate again for every child's column size and lay out.
    pub fn reload_column_sizes(&mut self) {
        let delegate = self.delegate();
        for entry in self.entries.iter_mut() {
            entry.column = classify(delegate.as_deref(), &entry.controller);
        }
        self.set_needs_layout();
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Lay the children out in a container of `size`.
    pub fn layout(&mut self, size: Size) {
        self.bounds = size;
        self.surface.set_bounds(size);

        let coordinator = self.update_columns();
        self.with_surface(|surface, bridge| surface.layout(bridge));
        self.update_overlay();
        if let Some(coordinator) = coordinator {
            coordinator.complete();
        }
    }

    fn set_needs_layout(&mut self) {
        self.layout(self.bounds);
    }

    /// Resolve display mode and widths for the current children. Returns
    /// the coordinator of a display mode change, if one happened.
    fn update_columns(&mut self) -> Option<TransitionCoordinator> {
        let sizes: Vec<ColumnSize> = self.entries.iter().map(|e| e.column).collect();
        let resolved = resolve_columns(
            self.bounds.width,
            &sizes,
            self.snapped_index(),
            self.config.preferred_display_mode,
            &self.config.column_metrics(),
        );

        let coordinator = if !self.entries.is_empty() && resolved.display_mode != self.display_mode
        {
            Some(self.change_display_mode(resolved.display_mode))
        } else {
            None
        };

        for (entry, column) in self.entries.iter_mut().zip(&resolved.columns) {
            entry.width = column.width;
            entry.effective_column = column.effective;
        }
        if self.column_layout.as_ref() != Some(&resolved) {
            self.surface.invalidate_pane_sizes();
        }
        self.column_layout = Some(resolved);

        let paging = self.display_mode == DisplayMode::SinglePage;
        self.surface.set_paging_enabled(paging);
        for entry in &self.entries {
            if let Some(pane) = self.surface.pane_mut(entry.pane) {
                configure_pane(pane, paging);
            }
        }
        coordinator
    }

    fn change_display_mode(&mut self, to: DisplayMode) -> TransitionCoordinator {
        let mut coordinator = TransitionCoordinator::new(DisplayModeTransition {
            from: self.display_mode,
            to,
            container_size: self.bounds,
        });
        if let Some(delegate) = self.delegate() {
            delegate.will_change_to_display_mode(to, &mut coordinator);
        }
        log::debug!(
            "Display mode {:?} -> {:?} at width {}",
            self.display_mode,
            to,
            self.bounds.width
        );
        self.display_mode = to;
        coordinator.run_alongside();
        coordinator
    }

    fn update_overlay(&mut self) {
        if !self.config.includes_rounded_corners_overlay || self.bounds.is_empty() {
            self.overlay = None;
            return;
        }
        let frame = Rect::from_size(self.bounds);
        match &mut self.overlay {
            Some(overlay) => overlay.set_frame(frame),
            None => self.overlay = Some(RoundedCornerOverlay::new(frame)),
        }
    }

    /// Run a surface operation with the controller acting as its delegate.
    /// A snap that changes which child is fullscreen triggers a new layout.
    fn with_surface<R>(
        &mut self,
        f: impl FnOnce(&mut PagedScrollSurface, &mut SurfaceBridge<'_>) -> R,
    ) -> R {
        let fullscreen_before = self.snapped_is_fullscreen();
        let delegate = self.delegate();
        let mut bridge = SurfaceBridge {
            entries: &mut self.entries,
            delegate,
            observers: &mut self.observers,
            bars: &mut self.bars,
            did_snap: false,
        };
        let result = f(&mut self.surface, &mut bridge);
        let did_snap = bridge.did_snap;

        if did_snap && self.snapped_is_fullscreen() != fullscreen_before {
            self.set_needs_layout();
        }
        result
    }

    fn snapped_is_fullscreen(&self) -> bool {
        self.snapped_index()
            .map_or(false, |i| self.entries[i].column == ColumnSize::Fullscreen)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current arrangement. Never [`DisplayMode::Automatic`].
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn column_layout(&self) -> Option<&ColumnLayout> {
        self.column_layout.as_ref()
    }

    pub fn surface(&self) -> &PagedScrollSurface {
        &self.surface
    }

    pub fn rounded_corner_overlay(&self) -> Option<&RoundedCornerOverlay> {
        self.overlay.as_ref()
    }

    /// Children whose panes intersect the visible region, in order.
    pub fn visible_view_controllers(&self) -> Vec<ViewControllerRef> {
        self.surface
            .indexes_for_visible_panes()
            .iter()
            .filter_map(|&i| self.entries.get(i))
            .map(|e| e.controller.clone())
            .collect()
    }

    /// The first child that is only partly on screen.
    pub fn partially_visible_view_controller(&self) -> Option<ViewControllerRef> {
        self.surface
            .partially_visible_panes()
            .into_iter()
            .find_map(|pane| self.controller_for_pane(pane))
    }

    pub fn snapped_view_controller(&self) -> Option<ViewControllerRef> {
        self.surface
            .snapped_pane()
            .and_then(|pane| self.controller_for_pane(pane))
    }

    /// Column size the delegate gave the child.
    pub fn column_size_for(&self, view_controller: &ViewControllerRef) -> Option<ColumnSize> {
        self.entry_for(view_controller).map(|e| e.column)
    }

    /// Width assigned to the child by the last layout.
    pub fn width_for(&self, view_controller: &ViewControllerRef) -> Option<f32> {
        self.entry_for(view_controller).map(|e| e.width)
    }

    /// Frame of the child's pane in surface coordinates.
    pub fn frame_for(&self, view_controller: &ViewControllerRef) -> Option<Rect> {
        self.entry_for(view_controller)
            .and_then(|e| self.surface.rect_for_pane(e.pane))
    }

    /// Whether the child may be hidden without leaving nothing to snap to.
    pub fn can_toggle_visibility_for_view_controller(
        &self,
        view_controller: &ViewControllerRef,
    ) -> bool {
        let Some(entry) = self.entry_for(view_controller) else {
            return false;
        };
        if entry.column == ColumnSize::Fullscreen || self.entries.len() < 2 {
            return false;
        }
        match self.display_mode {
            DisplayMode::AllVisible => {
                matches!(entry.column, ColumnSize::Primary | ColumnSize::Auxiliary)
            }
            _ => true,
        }
    }

    fn controller_for_pane(&self, pane: PaneId) -> Option<ViewControllerRef> {
        self.entries
            .iter()
            .find(|e| e.pane == pane)
            .map(|e| e.controller.clone())
    }

    fn snapped_index(&self) -> Option<usize> {
        let pane = self.surface.snapped_pane()?;
        self.entries.iter().position(|e| e.pane == pane)
    }

    /// Pane to snap after a stack change.
    fn surviving_snap(
        &self,
        previous: &[ViewControllerRef],
        previous_snapped: Option<usize>,
    ) -> Option<PaneId> {
        if let Some(index) = previous_snapped {
            let survivor = previous[..=index]
                .iter()
                .rev()
                .find_map(|vc| self.entry_for(vc));
            if let Some(entry) = survivor {
                return Some(entry.pane);
            }
        }
        self.entries.first().map(|e| e.pane)
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// Scroll until the child is snapped. No-op for unknown children.
    pub fn scroll_to_view_controller(&mut self, view_controller: &ViewControllerRef, animated: bool) {
        let Some(pane) = self.entry_for(view_controller).map(|e| e.pane) else {
            log::debug!("Ignoring scroll to a child that is not in the stack");
            return;
        };
        self.with_surface(|surface, bridge| surface.scroll_to_pane(pane, animated, bridge));
    }

    /// Frame-clock tick. Returns whether an animation is still running.
    pub fn advance_frame(&mut self, dt: f32) -> bool {
        self.with_surface(|surface, bridge| surface.advance(dt, bridge))
    }

    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    pub fn begin_drag(&mut self) {
        if self.config.interactive_gestures_disabled {
            log::trace!("Drag ignored, interactive gestures are disabled");
            return;
        }
        self.surface.begin_drag();
    }

    pub fn drag_by(&mut self, dx: f32) {
        if self.config.interactive_gestures_disabled {
            return;
        }
        self.with_surface(|surface, bridge| surface.drag_by(dx, bridge));
    }

    pub fn end_drag(&mut self, velocity: f32) {
        if self.config.interactive_gestures_disabled {
            return;
        }
        self.with_surface(|surface, bridge| surface.end_drag(velocity, bridge));
    }

    /// A tap at `point` in surface coordinates. Returns whether it scrolled.
    pub fn tap(&mut self, point: Point) -> bool {
        if self.config.interactive_gestures_disabled {
            return false;
        }
        self.with_surface(|surface, bridge| surface.tap(point, bridge))
    }

    // ------------------------------------------------------------------
    // Supplementary bars
    // ------------------------------------------------------------------

    /// The child's header bar, created on first request.
    pub fn header_bar_for(&mut self, view_controller: &ViewControllerRef) -> Option<Rc<HeaderBar>> {
        if !self.contains(view_controller) {
            return None;
        }
        let stack = self.view_controllers();
        let seed = self.bar_seed(view_controller, &stack);
        Some(self.bars.header_for(view_controller, &seed))
    }

    /// The child's footer bar, created on first request.
    pub fn footer_bar_for(&mut self, view_controller: &ViewControllerRef) -> Option<Rc<FooterBar>> {
        if !self.contains(view_controller) {
            return None;
        }
        let stack = self.view_controllers();
        let seed = self.bar_seed(view_controller, &stack);
        Some(self.bars.footer_for(view_controller, &seed))
    }

    pub fn supplementary_bar_count(&self) -> usize {
        self.bars.len()
    }

    fn bar_seed<'a>(
        &self,
        view_controller: &ViewControllerRef,
        stack: &'a [ViewControllerRef],
    ) -> BarSeed<'a> {
        BarSeed {
            stack,
            displayed: self
                .entry_for(view_controller)
                .map_or(false, |e| e.visibility() == Visibility::Displayed),
            snapped: self.snapped_view_controller(),
        }
    }
}

impl Default for SplitViewController {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(
    delegate: Option<&dyn SplitViewControllerDelegate>,
    view_controller: &ViewControllerRef,
) -> ColumnSize {
    delegate
        .map(|d| d.column_size_for_view_controller(view_controller))
        .unwrap_or_default()
}

fn configure_pane(pane: &mut PaneView, paging: bool) {
    pane.set_paging_enabled(paging);
    let style = if paging {
        SeparatorStyle::DropShadow
    } else {
        SeparatorStyle::SingleLine
    };
    pane.separator_mut().set_style(style);
}
