//! Header and footer bars attached to individual children.
//!
//! Bars are created lazily the first time they are requested, cached per
//! child and dropped when the child leaves the stack. Every live bar
//! receives the controller's display, snap and stack broadcasts.

mod footer;
mod header;

pub use footer::FooterBar;
pub use header::HeaderBar;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::controller::{same_view_controller, ViewController, ViewControllerRef};
use crate::observer::ObserverSet;

/// Receives the broadcasts of the controller a bar belongs to.
pub trait SupplementaryBar {
    /// The bar was attached to its controller.
    fn did_move_to_controller(&self) {}

    /// The bar is about to be detached because its child left the stack.
    fn will_move_from_controller(&self) {}

    fn will_display_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn will_snap_to_view_controller(&self, _view_controller: &ViewControllerRef) {}

    fn view_controllers_did_change(&self, _stack: &[ViewControllerRef]) {}
}

/// Width of a [`BarItem::fixed_space`].
pub const FIXED_SPACE_WIDTH: f32 = 44.0;

/// An item shown in a bar.
#[derive(Debug, Clone, PartialEq)]
pub enum BarItem {
    Button { title: String, enabled: bool },
    /// Blank space of a fixed width
    FixedSpace(f32),
    /// Blank space sharing whatever width the other items leave
    FlexibleSpace,
}

impl BarItem {
    pub fn button(title: impl Into<String>) -> Self {
        BarItem::Button {
            title: title.into(),
            enabled: true,
        }
    }

    /// Space one button wide, used to line footer items up across panes.
    pub fn fixed_space() -> Self {
        BarItem::FixedSpace(FIXED_SPACE_WIDTH)
    }

    pub fn flexible_space() -> Self {
        BarItem::FlexibleSpace
    }

    /// Disable a button. Spaces are returned unchanged.
    pub fn disabled(self) -> Self {
        match self {
            BarItem::Button { title, .. } => BarItem::Button {
                title,
                enabled: false,
            },
            space => space,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            BarItem::Button { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, BarItem::Button { enabled: true, .. })
    }

    pub fn is_space(&self) -> bool {
        !matches!(self, BarItem::Button { .. })
    }
}

/// Widths of `items` laid out in `available` points. Buttons take
/// `button_width`, fixed spaces their own width and flexible spaces split
/// the rest equally.
pub fn item_widths(items: &[BarItem], available: f32, button_width: f32) -> Vec<f32> {
    let mut used = 0.0;
    let mut flexible = 0;
    for item in items {
        match item {
            BarItem::Button { .. } => used += button_width,
            BarItem::FixedSpace(width) => used += width.max(0.0),
            BarItem::FlexibleSpace => flexible += 1,
        }
    }
    let share = if flexible > 0 {
        ((available - used) / flexible as f32).max(0.0)
    } else {
        0.0
    };

    items
        .iter()
        .map(|item| match item {
            BarItem::Button { .. } => button_width,
            BarItem::FixedSpace(width) => width.max(0.0),
            BarItem::FlexibleSpace => share,
        })
        .collect()
}

/// What a newly created bar is told about the controller it joins.
pub(crate) struct BarSeed<'a> {
    pub stack: &'a [ViewControllerRef],
    /// The bar's child is already on screen
    pub displayed: bool,
    pub snapped: Option<ViewControllerRef>,
}

/// State every bar tracks about its child.
pub(crate) struct BarState {
    view_controller: Weak<dyn ViewController>,
    previous: RefCell<Option<Weak<dyn ViewController>>>,
    attached: Cell<bool>,
    displayed: Cell<bool>,
    snapped: Cell<bool>,
}

impl BarState {
    pub(crate) fn new(view_controller: &ViewControllerRef) -> Self {
        Self {
            view_controller: Rc::downgrade(view_controller),
            previous: RefCell::new(None),
            attached: Cell::new(false),
            displayed: Cell::new(false),
            snapped: Cell::new(false),
        }
    }

    pub(crate) fn view_controller(&self) -> Option<ViewControllerRef> {
        self.view_controller.upgrade()
    }

    /// The child arranged just before this bar's child, if any.
    pub(crate) fn previous(&self) -> Option<ViewControllerRef> {
        self.previous.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub(crate) fn is_displayed(&self) -> bool {
        self.displayed.get()
    }

    pub(crate) fn is_snapped(&self) -> bool {
        self.snapped.get()
    }

    fn is_own(&self, view_controller: &ViewControllerRef) -> bool {
        self.view_controller()
            .map_or(false, |own| same_view_controller(&own, view_controller))
    }

    pub(crate) fn will_display(&self, view_controller: &ViewControllerRef) {
        if self.is_own(view_controller) {
            self.displayed.set(true);
        }
    }

    pub(crate) fn will_snap(&self, view_controller: &ViewControllerRef) {
        self.snapped.set(self.is_own(view_controller));
    }

    pub(crate) fn stack_did_change(&self, stack: &[ViewControllerRef]) {
        let previous = stack
            .iter()
            .position(|vc| self.is_own(vc))
            .and_then(|index| index.checked_sub(1))
            .map(|index| Rc::downgrade(&stack[index]));
        *self.previous.borrow_mut() = previous;
    }
}

/// Bars owned by one controller.
#[derive(Default)]
pub(crate) struct SupplementaryBars {
    headers: Vec<(ViewControllerRef, Rc<HeaderBar>)>,
    footers: Vec<(ViewControllerRef, Rc<FooterBar>)>,
    listeners: ObserverSet<dyn SupplementaryBar>,
}

impl SupplementaryBars {
    pub(crate) fn header_for(
        &mut self,
        view_controller: &ViewControllerRef,
        seed: &BarSeed<'_>,
    ) -> Rc<HeaderBar> {
        if let Some((_, bar)) = self
            .headers
            .iter()
            .find(|(vc, _)| same_view_controller(vc, view_controller))
        {
            return bar.clone();
        }
        let bar = Rc::new(HeaderBar::new(view_controller));
        let listener: Rc<dyn SupplementaryBar> = bar.clone();
        self.attach(&listener, view_controller, seed);
        self.headers.push((view_controller.clone(), bar.clone()));
        bar
    }

    pub(crate) fn footer_for(
        &mut self,
        view_controller: &ViewControllerRef,
        seed: &BarSeed<'_>,
    ) -> Rc<FooterBar> {
        if let Some((_, bar)) = self
            .footers
            .iter()
            .find(|(vc, _)| same_view_controller(vc, view_controller))
        {
            return bar.clone();
        }
        let bar = Rc::new(FooterBar::new(view_controller));
        let listener: Rc<dyn SupplementaryBar> = bar.clone();
        self.attach(&listener, view_controller, seed);
        self.footers.push((view_controller.clone(), bar.clone()));
        bar
    }

    /// Attach a new bar and replay what it missed before it existed.
    fn attach(
        &mut self,
        bar: &Rc<dyn SupplementaryBar>,
        view_controller: &ViewControllerRef,
        seed: &BarSeed<'_>,
    ) {
        bar.did_move_to_controller();
        bar.view_controllers_did_change(seed.stack);
        if seed.displayed {
            bar.will_display_view_controller(view_controller);
        }
        if let Some(snapped) = &seed.snapped {
            bar.will_snap_to_view_controller(snapped);
        }
        self.listeners.add(bar);
    }

    /// Detach and drop the bars of a child that left the stack.
    pub(crate) fn remove(&mut self, view_controller: &ViewControllerRef) {
        let mut detached: Vec<Rc<dyn SupplementaryBar>> = Vec::new();
        self.headers.retain(|(vc, bar)| {
            if same_view_controller(vc, view_controller) {
                detached.push(bar.clone());
                false
            } else {
                true
            }
        });
        self.footers.retain(|(vc, bar)| {
            if same_view_controller(vc, view_controller) {
                detached.push(bar.clone());
                false
            } else {
                true
            }
        });
        for bar in detached {
            bar.will_move_from_controller();
            self.listeners.remove(&bar);
        }
    }

    pub(crate) fn will_display(&mut self, view_controller: &ViewControllerRef) {
        self.listeners
            .for_each(|bar| bar.will_display_view_controller(view_controller));
    }

    pub(crate) fn will_snap(&mut self, view_controller: &ViewControllerRef) {
        self.listeners
            .for_each(|bar| bar.will_snap_to_view_controller(view_controller));
    }

    pub(crate) fn view_controllers_did_change(&mut self, stack: &[ViewControllerRef]) {
        self.listeners
            .for_each(|bar| bar.view_controllers_did_change(stack));
    }

    pub(crate) fn len(&self) -> usize {
        self.headers.len() + self.footers.len()
    }
}
