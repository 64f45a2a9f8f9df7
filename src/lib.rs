//! A gesture-driven, horizontally paged split view controller.
//!
//! Children are arranged as panes on a horizontal scroll surface. Depending
//! on the available width they are shown side by side or one page at a
//! time, and drags come to rest on a pane boundary with spring motion.

pub mod animation;
pub mod bars;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod observer;
pub mod overlay;
pub mod pane;
pub mod scroll;

pub use error::{Result, SplitError};

pub mod prelude {
    pub use crate::animation::{SpringConfig, SpringScrollAnimator};
    pub use crate::bars::{BarItem, FooterBar, HeaderBar, SupplementaryBar};
    pub use crate::controller::{
        same_view_controller, DisplayModeTransition, SplitConfig, SplitViewController,
        SplitViewControllerDelegate, SplitViewObserver, TransitionCoordinator, ViewController,
        ViewControllerRef, Visibility,
    };
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::layout::{ColumnSize, DisplayMode};
    pub use crate::overlay::{Corners, RoundedCornerOverlay};
    pub use crate::pane::{PaneId, PaneView, ViewHandle};
    pub use crate::scroll::{PagedScrollSurface, ScrollSurfaceDelegate};
    pub use crate::{Result, SplitError};
}
