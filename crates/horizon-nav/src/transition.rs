//! View transitions and the headless transition driver.
//!
//! The driver is the rendering collaborator's side of the contract: it
//! watches the state, animates toward one destination at a time, and calls
//! `finish_transition()` exactly once when that animation completes. It has
//! no knowledge of the request queue.

use crate::{EffectSet, Focus, NavigationState, NavigationStore};
use serde::{Deserialize, Serialize};

/// Durations for animated level changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    /// Minimum duration of any transition, in seconds.
    pub base_secs: f32,
    /// Added per level crossed.
    pub per_level_secs: f32,
    /// Added when the moon sub-focus changes.
    pub moon_secs: f32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            base_secs: 0.4,
            per_level_secs: 0.15,
            moon_secs: 0.3,
        }
    }
}

impl TransitionTiming {
    pub fn duration(&self, from: &Focus, to: &Focus) -> f32 {
        let levels = from.level.distance(to.level) as f32;
        let moon = if from.moon_id != to.moon_id {
            self.moon_secs
        } else {
            0.0
        };
        (self.base_secs + levels * self.per_level_secs + moon).max(0.0)
    }
}

/// One animated move between two destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTransition {
    pub from: Focus,
    pub to: Focus,
    pub duration: f32,
    pub elapsed: f32,
}

impl ViewTransition {
    pub fn new(from: Focus, to: Focus, timing: &TransitionTiming) -> Self {
        let duration = timing.duration(&from, &to);
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Progress from 0.0 (start) to 1.0 (complete).
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}

/// What the driver needs from the navigation core.
///
/// Implemented by both the bare state and the observable store so the driver
/// works in tests and in the app alike.
pub trait TransitionHost {
    fn is_transitioning(&self) -> bool;
    fn focus(&self) -> &Focus;
    fn finish_transition(&mut self) -> EffectSet;
}

impl TransitionHost for NavigationState {
    fn is_transitioning(&self) -> bool {
        NavigationState::is_transitioning(self)
    }

    fn focus(&self) -> &Focus {
        NavigationState::focus(self)
    }

    fn finish_transition(&mut self) -> EffectSet {
        NavigationState::finish_transition(self)
    }
}

impl TransitionHost for NavigationStore {
    fn is_transitioning(&self) -> bool {
        self.state().is_transitioning()
    }

    fn focus(&self) -> &Focus {
        self.state().focus()
    }

    fn finish_transition(&mut self) -> EffectSet {
        NavigationStore::finish_transition(self)
    }
}

/// Per-frame animator reporting completion back to the host.
#[derive(Debug, Clone, Default)]
pub struct TransitionDriver {
    timing: TransitionTiming,
    /// Destination the camera last arrived at.
    resting: Focus,
    active: Option<ViewTransition>,
    completed: u64,
}

impl TransitionDriver {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            ..Default::default()
        }
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn active(&self) -> Option<&ViewTransition> {
        self.active.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Number of `finish_transition()` calls issued so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Advance by `dt` seconds. Returns the effects of the completion call
    /// when a transition finished this frame, empty otherwise.
    pub fn tick(&mut self, host: &mut impl TransitionHost, dt: f32) -> EffectSet {
        if !host.is_transitioning() {
            // Reset or escape hatch cleared the flag under us
            if let Some(active) = self.active.take() {
                tracing::debug!(to = %active.to.level, "transition abandoned");
            }
            self.resting = host.focus().clone();
            return EffectSet::empty();
        }

        let retarget = self
            .active
            .as_ref()
            .map_or(true, |active| &active.to != host.focus());
        if retarget {
            let from = match self.active.take() {
                Some(previous) => previous.from,
                None => self.resting.clone(),
            };
            let transition = ViewTransition::new(from, host.focus().clone(), &self.timing);
            tracing::trace!(
                to = %transition.to.level,
                duration = transition.duration,
                "transition animation started"
            );
            self.active = Some(transition);
        }

        let Some(active) = self.active.as_mut() else {
            return EffectSet::empty();
        };
        active.advance(dt);
        if !active.is_complete() {
            return EffectSet::empty();
        }

        if let Some(done) = self.active.take() {
            self.resting = done.to;
        }
        self.completed += 1;
        host.finish_transition()
    }

    /// Tick at a fixed frame rate until the host goes idle.
    ///
    /// Returns the number of frames run. Stops after `max_frames` in case
    /// the host is held in flight by something other than this driver.
    pub fn settle(&mut self, host: &mut impl TransitionHost, dt: f32, max_frames: usize) -> usize {
        let mut frames = 0;
        while host.is_transitioning() && frames < max_frames {
            self.tick(host, dt);
            frames += 1;
        }
        frames
    }
}
