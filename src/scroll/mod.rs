//! Horizontally paged scroll surface.

mod delegate;
mod snap;
mod state;
mod surface;

pub use delegate::ScrollSurfaceDelegate;
pub use snap::{nearest_boundary, snap_target, DEFAULT_SNAP_VELOCITY_THRESHOLD};
pub use surface::PagedScrollSurface;
