use super::spring::{SpringConfig, SpringState};
use crate::error::Result;

/// Result of advancing the animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    /// No animation is running
    Idle,
    /// The offset moved and the animation continues
    Moved(f32),
    /// The animation reached its target and stopped
    Settled(f32),
}

impl AnimationStep {
    /// Offset produced by this step, if any.
    pub fn offset(&self) -> Option<f32> {
        match self {
            AnimationStep::Idle => None,
            AnimationStep::Moved(offset) | AnimationStep::Settled(offset) => Some(*offset),
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, AnimationStep::Settled(_))
    }
}

/// Something whose horizontal content offset can be driven by the animator.
pub trait ScrollTarget {
    fn set_content_offset(&mut self, offset: f32);

    /// Called once when an animation settles on its target.
    fn animation_did_settle(&mut self, _offset: f32) {}
}

/// Drives a scroll offset toward a target using spring physics.
///
/// The animator is a pure step function: the host calls [`advance`] once per
/// frame with the elapsed time. Only one animation runs at a time; starting a
/// new one replaces the old.
///
/// [`advance`]: SpringScrollAnimator::advance
#[derive(Debug, Clone)]
pub struct SpringScrollAnimator {
    config: SpringConfig,
    state: Option<SpringState>,
}

impl SpringScrollAnimator {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Replace the spring parameters. Invalid parameters are rejected and the
    /// current configuration is kept. A running animation picks up the new
    /// parameters on its next step.
    pub fn set_config(&mut self, config: SpringConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    /// Target offset of the running animation.
    pub fn target(&self) -> Option<f32> {
        self.state.as_ref().map(|s| s.target)
    }

    /// Current interpolated offset of the running animation.
    pub fn current(&self) -> Option<f32> {
        self.state.as_ref().map(|s| s.position)
    }

    /// Start animating from `from` to `to`, cancelling any running animation.
    pub fn animate_scroll_to(&mut self, from: f32, to: f32) {
        if self.state.is_some() {
            log::trace!("Replacing running scroll animation");
        }
        let state = SpringState::new(from, to, &self.config);
        log::trace!("Animating scroll offset {} -> {}", from, to);
        self.state = Some(state);
    }

    /// Move the running animation to start at `from` and end at `to`,
    /// keeping its velocity. Returns false if nothing was running.
    pub fn retarget(&mut self, from: f32, to: f32) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        log::trace!("Retargeting scroll animation {} -> {}", from, to);
        state.position = from;
        state.target = to;
        true
    }

    /// Stop the animation where it is. Returns the frozen offset, or `None`
    /// if nothing was running.
    pub fn cancel(&mut self) -> Option<f32> {
        let state = self.state.take()?;
        log::trace!("Cancelled scroll animation at {}", state.position);
        Some(state.position)
    }

    /// Advance the running animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> AnimationStep {
        let Some(state) = self.state.as_mut() else {
            return AnimationStep::Idle;
        };

        state.step(dt, &self.config);

        if state.is_settled() {
            state.settle();
            let offset = state.position;
            self.state = None;
            AnimationStep::Settled(offset)
        } else {
            AnimationStep::Moved(state.position)
        }
    }

    /// Advance and push the resulting offset into `target`.
    pub fn drive(&mut self, dt: f32, target: &mut dyn ScrollTarget) -> AnimationStep {
        let step = self.advance(dt);
        match step {
            AnimationStep::Idle => {}
            AnimationStep::Moved(offset) => target.set_content_offset(offset),
            AnimationStep::Settled(offset) => {
                target.set_content_offset(offset);
                target.animation_did_settle(offset);
            }
        }
        step
    }
}

impl Default for SpringScrollAnimator {
    fn default() -> Self {
        Self::new(SpringConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        offsets: Vec<f32>,
        settled: Vec<f32>,
    }

    impl ScrollTarget for Recorder {
        fn set_content_offset(&mut self, offset: f32) {
            self.offsets.push(offset);
        }

        fn animation_did_settle(&mut self, offset: f32) {
            self.settled.push(offset);
        }
    }

    #[test]
    fn test_idle_animator_does_nothing() {
        let mut animator = SpringScrollAnimator::default();
        assert_eq!(animator.advance(1.0 / 60.0), AnimationStep::Idle);
        assert_eq!(animator.cancel(), None);
    }

    #[test]
    fn test_drive_reports_every_step_and_settles_once() {
        let mut animator = SpringScrollAnimator::new(SpringConfig::SNAP);
        let mut target = Recorder::default();
        animator.animate_scroll_to(0.0, 320.0);

        let mut frames = 0;
        while animator.is_animating() && frames < 600 {
            animator.drive(1.0 / 60.0, &mut target);
            frames += 1;
        }

        assert!(!animator.is_animating());
        assert_eq!(target.offsets.len(), frames);
        assert_eq!(target.settled, vec![320.0]);
        assert_eq!(target.offsets.last().copied(), Some(320.0));
    }

    #[test]
    fn test_cancel_freezes_offset() {
        let mut animator = SpringScrollAnimator::new(SpringConfig::SNAP);
        animator.animate_scroll_to(0.0, 500.0);
        animator.advance(1.0 / 60.0);
        let at_cancel = animator.current().unwrap();

        assert_eq!(animator.cancel(), Some(at_cancel));
        for _ in 0..10 {
            assert_eq!(animator.advance(1.0 / 60.0), AnimationStep::Idle);
        }
    }

    #[test]
    fn test_new_animation_replaces_running_one() {
        let mut animator = SpringScrollAnimator::new(SpringConfig::SNAP);
        animator.animate_scroll_to(0.0, 500.0);
        animator.advance(1.0 / 60.0);
        animator.animate_scroll_to(10.0, -200.0);
        assert_eq!(animator.target(), Some(-200.0));
        assert_eq!(animator.current(), Some(10.0));
    }

    #[test]
    fn test_retarget_keeps_animating_toward_new_target() {
        let mut animator = SpringScrollAnimator::new(SpringConfig::SNAP);
        assert!(!animator.retarget(0.0, 100.0));

        animator.animate_scroll_to(0.0, 600.0);
        animator.advance(1.0 / 60.0);
        assert!(animator.retarget(250.0, 300.0));
        assert_eq!(animator.current(), Some(250.0));

        let mut last = AnimationStep::Idle;
        for _ in 0..600 {
            last = animator.advance(1.0 / 60.0);
            if last.is_settled() {
                break;
            }
        }
        assert_eq!(last, AnimationStep::Settled(300.0));
    }

    #[test]
    fn test_set_config_rejects_invalid_spring() {
        let mut animator = SpringScrollAnimator::default();
        let bad = SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::DEFAULT
        };
        assert!(animator.set_config(bad).is_err());
        assert_eq!(*animator.config(), SpringConfig::DEFAULT);
    }
}
