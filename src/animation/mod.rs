//! Spring physics used to animate scroll offsets.

mod animatable;
mod scroll_animator;
mod spring;

pub use animatable::Animatable;
pub use scroll_animator::{AnimationStep, ScrollTarget, SpringScrollAnimator};
pub use spring::{SpringConfig, SpringState, REST_DISPLACEMENT, REST_VELOCITY};
