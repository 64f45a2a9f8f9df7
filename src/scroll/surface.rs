use std::collections::{HashMap, HashSet};

use bitflags::bitflags;

use super::delegate::ScrollSurfaceDelegate;
use super::snap::{snap_target, DEFAULT_SNAP_VELOCITY_THRESHOLD};
use super::state::ScrollState;
use crate::animation::{SpringConfig, SpringScrollAnimator, REST_DISPLACEMENT};
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::pane::{HuggingSupport, PaneId, PaneView};

bitflags! {
    /// Transient state of a surface
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct SurfaceFlags: u8 {
        /// Frames must be recomputed before they are trusted
        const NEEDS_LAYOUT = 0b001;
        /// A user drag is in progress
        const DRAGGING     = 0b010;
        /// Drags move at most one pane at a time
        const PAGING       = 0b100;
    }
}

/// Arranges panes left to right and snaps the scroll offset to pane
/// boundaries.
///
/// The surface never holds on to its delegate; every operation that can
/// produce callbacks borrows one.
pub struct PagedScrollSurface {
    panes: Vec<PaneView>,
    size_cache: HashMap<PaneId, Size>,
    state: ScrollState,
    animator: SpringScrollAnimator,
    snapped: Option<PaneId>,
    pending_snap: Option<PaneId>,
    displayed: HashSet<PaneId>,
    visible: Vec<usize>,
    snap_velocity_threshold: f32,
    flags: SurfaceFlags,
}

impl PagedScrollSurface {
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            size_cache: HashMap::new(),
            state: ScrollState::default(),
            animator: SpringScrollAnimator::new(SpringConfig::SNAP),
            snapped: None,
            pending_snap: None,
            displayed: HashSet::new(),
            visible: Vec::new(),
            snap_velocity_threshold: DEFAULT_SNAP_VELOCITY_THRESHOLD,
            flags: SurfaceFlags::NEEDS_LAYOUT,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn bounds(&self) -> Size {
        Size::new(self.state.viewport_width, self.state.viewport_height)
    }

    /// Resize the viewport. Cached pane sizes are dropped when the size
    /// actually changes.
    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds == self.bounds() {
            return;
        }
        self.state.viewport_width = bounds.width.max(0.0);
        self.state.viewport_height = bounds.height.max(0.0);
        self.invalidate_pane_sizes();
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.flags.contains(SurfaceFlags::PAGING)
    }

    /// With paging enabled a drag moves at most one pane away from the
    /// snapped one.
    pub fn set_paging_enabled(&mut self, enabled: bool) {
        self.flags.set(SurfaceFlags::PAGING, enabled);
    }

    pub fn snap_velocity_threshold(&self) -> f32 {
        self.snap_velocity_threshold
    }

    pub fn set_snap_velocity_threshold(&mut self, threshold: f32) {
        self.snap_velocity_threshold = threshold.abs();
    }

    pub fn spring_config(&self) -> &SpringConfig {
        self.animator.config()
    }

    pub fn set_spring_config(&mut self, config: SpringConfig) -> Result<()> {
        self.animator.set_config(config)
    }

    // ------------------------------------------------------------------
    // Panes
    // ------------------------------------------------------------------

    pub fn panes(&self) -> &[PaneView] {
        &self.panes
    }

    pub fn pane(&self, id: PaneId) -> Option<&PaneView> {
        self.panes.iter().find(|p| p.id() == id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut PaneView> {
        self.panes.iter_mut().find(|p| p.id() == id)
    }

    pub fn index_of(&self, id: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| p.id() == id)
    }

    /// Move the arranged panes out, leaving the surface empty until the
    /// next [`set_panes`](Self::set_panes). Snap and display state are kept
    /// so they can be matched against the replacement list.
    pub(crate) fn take_panes(&mut self) -> Vec<PaneView> {
        self.visible.clear();
        std::mem::take(&mut self.panes)
    }

    /// Choose the pane the next [`set_panes`](Self::set_panes) keeps
    /// snapped, if it is part of the new list.
    pub(crate) fn preselect(&mut self, pane: Option<PaneId>) {
        self.snapped = pane;
    }

    /// Replace the arranged panes and lay them out. Never animates.
    ///
    /// Cached sizes survive for panes that stay. The snapped pane is kept if
    /// it is still arranged, otherwise the first pane is snapped. Panes that
    /// left the surface are dropped without display callbacks.
    pub fn set_panes(&mut self, panes: Vec<PaneView>, delegate: &mut dyn ScrollSurfaceDelegate) {
        let ids: HashSet<PaneId> = panes.iter().map(PaneView::id).collect();
        self.panes = panes;
        self.size_cache.retain(|id, _| ids.contains(id));
        self.displayed.retain(|id| ids.contains(id));

        if self.animator.cancel().is_some() {
            log::debug!("Pane list replaced during a snap animation");
        }
        self.pending_snap = None;

        if !self.snapped.map_or(false, |id| ids.contains(&id)) {
            self.snapped = self.panes.first().map(PaneView::id);
        }

        self.flags.insert(SurfaceFlags::NEEDS_LAYOUT);
        self.layout(delegate);
    }

    /// Forget every cached pane size. Fresh sizes are requested from the
    /// delegate on the next layout pass.
    pub fn invalidate_pane_sizes(&mut self) {
        self.size_cache.clear();
        self.flags.insert(SurfaceFlags::NEEDS_LAYOUT);
    }

    pub fn needs_layout(&self) -> bool {
        self.flags.contains(SurfaceFlags::NEEDS_LAYOUT)
    }

    // ------------------------------------------------------------------
    // Geometry queries
    // ------------------------------------------------------------------

    pub fn content_offset(&self) -> f32 {
        self.state.offset_x
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.state.content_width, self.state.viewport_height)
    }

    /// The part of the content currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            self.state.offset_x,
            0.0,
            self.state.viewport_width,
            self.state.viewport_height,
        )
    }

    /// Frame of `pane` in the surface's content coordinates, or `None` if
    /// the pane is not arranged.
    pub fn rect_for_pane(&self, pane: PaneId) -> Option<Rect> {
        self.pane(pane).map(PaneView::frame)
    }

    /// Every pane whose frame intersects `rect`, in arrangement order.
    pub fn panes_in_rect(&self, rect: Rect) -> Vec<PaneId> {
        self.panes
            .iter()
            .filter(|p| p.frame().intersects(&rect))
            .map(PaneView::id)
            .collect()
    }

    /// Indexes of the panes with any part on screen, in arrangement order.
    pub fn indexes_for_visible_panes(&self) -> &[usize] {
        &self.visible
    }

    /// Fraction of the pane's width that is on screen.
    pub fn visible_fraction(&self, pane: PaneId) -> f32 {
        self.pane(pane)
            .map(|p| self.fraction_at(p.frame(), self.state.offset_x))
            .unwrap_or(0.0)
    }

    /// Visible panes that are not entirely on screen.
    pub fn partially_visible_panes(&self) -> Vec<PaneId> {
        self.visible
            .iter()
            .map(|&i| &self.panes[i])
            .filter(|p| self.fraction_at(p.frame(), self.state.offset_x) < 1.0 - 1e-4)
            .map(PaneView::id)
            .collect()
    }

    /// The pane the surface is snapped to (or, while animating, last
    /// snapped to).
    pub fn snapped_pane(&self) -> Option<PaneId> {
        self.snapped
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.flags.contains(SurfaceFlags::DRAGGING)
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Lay the panes out left to right with no gaps.
    ///
    /// At rest the offset is aligned to the snapped pane and display
    /// callbacks are sent for panes that entered or left the screen.
    pub fn layout(&mut self, delegate: &mut dyn ScrollSurfaceDelegate) {
        let bounds = self.bounds();
        let mut x = 0.0;

        for index in 0..self.panes.len() {
            let id = self.panes[index].id();
            let size = match self.size_cache.get(&id) {
                Some(size) => *size,
                None => {
                    let size = delegate
                        .size_for_pane(id, index, bounds)
                        .map(sanitize_size)
                        .unwrap_or(bounds);
                    self.size_cache.insert(id, size);
                    size
                }
            };
            self.panes[index].set_frame(Rect::new(x, 0.0, size.width, size.height));
            x += size.width;
        }
        self.state.content_width = x;

        let mut arrived = None;
        if self.is_at_rest() {
            if let Some(offset) = self.snapped.and_then(|id| self.resting_offset(id)) {
                self.state.offset_x = offset;
            } else {
                self.state.clamp_offset();
            }
        } else if self.is_dragging() {
            self.state.clamp_offset();
        } else {
            arrived = self.realign_snap_animation();
        }

        self.flags.remove(SurfaceFlags::NEEDS_LAYOUT);
        self.offset_did_change(delegate);
        if let Some(id) = arrived {
            self.finish_snap(id, delegate);
        } else if self.is_at_rest() {
            self.end_displaying_hidden_panes(delegate);
        }
    }

    /// Point a running snap animation at the pending pane's new resting
    /// offset. Returns the pane if the offset is already there and the
    /// animation was stopped.
    fn realign_snap_animation(&mut self) -> Option<PaneId> {
        self.state.clamp_offset();
        let id = self.pending_snap?;
        let target = self.resting_offset(id)?;
        let offset = self.state.offset_x;

        if (target - offset).abs() > REST_DISPLACEMENT {
            self.animator.retarget(offset, target);
            return None;
        }
        self.animator.cancel();
        self.pending_snap = None;
        self.state.offset_x = target;
        Some(id)
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// Scroll so `pane` is snapped. No-op if the pane is not arranged.
    pub fn scroll_to_pane(
        &mut self,
        pane: PaneId,
        animated: bool,
        delegate: &mut dyn ScrollSurfaceDelegate,
    ) {
        let Some(index) = self.index_of(pane) else {
            log::debug!("Ignoring scroll to unknown pane {:?}", pane);
            return;
        };
        if self.needs_layout() {
            self.layout(delegate);
        }
        self.snap_to_index(index, animated, delegate);
    }

    /// Frame-clock entry point. Returns whether an animation is still
    /// running.
    pub fn advance(&mut self, dt: f32, delegate: &mut dyn ScrollSurfaceDelegate) -> bool {
        let step = self.animator.drive(dt, &mut self.state);
        let Some(offset) = step.offset() else {
            return false;
        };
        log::trace!("Scroll animation step: {}", offset);
        self.offset_did_change(delegate);

        if !step.is_settled() {
            return true;
        }
        if let Some(id) = self.pending_snap.take() {
            self.finish_snap(id, delegate);
        }
        false
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// A drag started. Any running animation stops where it is.
    pub fn begin_drag(&mut self) {
        if let Some(offset) = self.animator.cancel() {
            self.state.offset_x = offset;
        }
        self.pending_snap = None;
        self.flags.insert(SurfaceFlags::DRAGGING);
    }

    /// Move the content by `dx` points. Ignored unless a drag is in progress.
    pub fn drag_by(&mut self, dx: f32, delegate: &mut dyn ScrollSurfaceDelegate) {
        if !self.is_dragging() {
            return;
        }
        self.state.offset_x = self.state.clamp(self.state.offset_x + dx);
        self.offset_did_change(delegate);
    }

    /// The drag ended with `velocity` points per second (positive when the
    /// offset was increasing). Snaps to the chosen pane with animation.
    pub fn end_drag(&mut self, velocity: f32, delegate: &mut dyn ScrollSurfaceDelegate) {
        if !self.is_dragging() {
            return;
        }
        self.flags.remove(SurfaceFlags::DRAGGING);

        let boundaries: Vec<f32> = self
            .panes
            .iter()
            .map(|p| self.state.clamp(p.frame().x))
            .collect();
        let Some(mut index) = snap_target(
            &boundaries,
            self.state.offset_x,
            velocity,
            self.snap_velocity_threshold,
        ) else {
            return;
        };

        if self.is_paging_enabled() {
            if let Some(current) = self.snapped.and_then(|id| self.index_of(id)) {
                index = index.clamp(current.saturating_sub(1), current + 1);
            }
        }

        log::debug!(
            "Drag ended at {} with velocity {}, snapping to pane {}",
            self.state.offset_x,
            velocity,
            index
        );
        self.snap_to_index(index, true, delegate);
    }

    /// A tap at `point` (content coordinates). Tapping a partially visible
    /// pane scrolls to it with animation. Returns whether the tap was used.
    pub fn tap(&mut self, point: Point, delegate: &mut dyn ScrollSurfaceDelegate) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(pane) = self
            .panes
            .iter()
            .find(|p| p.frame().contains_point(point))
            .map(PaneView::id)
        else {
            return false;
        };
        if !self.partially_visible_panes().contains(&pane) {
            return false;
        }
        self.scroll_to_pane(pane, true, delegate);
        true
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn is_at_rest(&self) -> bool {
        !self.is_animating() && !self.is_dragging()
    }

    fn resting_offset(&self, pane: PaneId) -> Option<f32> {
        self.rect_for_pane(pane).map(|r| self.state.clamp(r.x))
    }

    fn fraction_at(&self, frame: Rect, offset: f32) -> f32 {
        if frame.width <= 0.0 {
            return 0.0;
        }
        let viewport = Rect::new(offset, frame.y, self.state.viewport_width, frame.height);
        (frame.horizontal_overlap(&viewport) / frame.width).clamp(0.0, 1.0)
    }

    fn indexes_visible_at(&self, offset: f32) -> Vec<usize> {
        self.panes
            .iter()
            .enumerate()
            .filter(|(_, p)| self.fraction_at(p.frame(), offset) > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Recompute visibility and hugging after the offset moved, announcing
    /// panes that came on screen.
    fn offset_did_change(&mut self, delegate: &mut dyn ScrollSurfaceDelegate) {
        let offset = self.state.offset_x;
        self.visible = self.indexes_visible_at(offset);

        for pane in self.panes.iter_mut() {
            let frame = pane.frame();
            let progress = if frame.width > 0.0 {
                (offset - frame.x) / frame.width
            } else {
                0.0
            };
            pane.set_hugging_progress(progress);
        }

        for index in self.visible.clone() {
            self.display(index, delegate);
        }
    }

    fn display(&mut self, index: usize, delegate: &mut dyn ScrollSurfaceDelegate) {
        let id = self.panes[index].id();
        if self.displayed.insert(id) {
            delegate.will_display_pane(id, index);
        }
    }

    fn end_displaying_hidden_panes(&mut self, delegate: &mut dyn ScrollSurfaceDelegate) {
        for index in 0..self.panes.len() {
            let id = self.panes[index].id();
            if !self.visible.contains(&index) && self.displayed.remove(&id) {
                delegate.did_end_displaying_pane(id, index);
            }
        }
    }

    fn snap_to_index(
        &mut self,
        index: usize,
        animated: bool,
        delegate: &mut dyn ScrollSurfaceDelegate,
    ) {
        let id = self.panes[index].id();
        let target = self.state.clamp(self.panes[index].frame().x);

        // Panes on screen at the destination appear before the snap starts
        for visible in self.indexes_visible_at(target) {
            self.display(visible, delegate);
        }
        delegate.will_snap_to_pane(id, index);

        let distance = (target - self.state.offset_x).abs();
        if animated && distance > REST_DISPLACEMENT {
            self.pending_snap = Some(id);
            self.animator
                .animate_scroll_to(self.state.offset_x, target);
        } else {
            self.animator.cancel();
            self.pending_snap = None;
            self.state.offset_x = target;
            self.offset_did_change(delegate);
            self.finish_snap(id, delegate);
        }
    }

    fn finish_snap(&mut self, id: PaneId, delegate: &mut dyn ScrollSurfaceDelegate) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.snapped = Some(id);
        log::debug!("Snapped to pane {} at offset {}", index, self.state.offset_x);
        delegate.did_snap_to_pane(id, index);
        self.end_displaying_hidden_panes(delegate);
    }
}

impl Default for PagedScrollSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}
