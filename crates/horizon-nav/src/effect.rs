//! Effect flags - the output protocol of every navigation operation.
//!
//! Each operation returns an EffectSet describing what changed. Callers
//! (camera animator, HUD, store observers) check the flags they care about.
//! An empty set means the call was a no-op.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of effects produced by a navigation operation.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_nav::EffectSet;
    ///
    /// let effects = EffectSet::FOCUS_CHANGED | EffectSet::TRANSITION_STARTED;
    ///
    /// if effects.starts_animation() {
    ///     // Begin flying the camera to the new destination
    /// }
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EffectSet: u8 {
        /// Focus level or a focused id changed.
        const FOCUS_CHANGED = 1 << 0;

        /// Idle -> Transitioning.
        const TRANSITION_STARTED = 1 << 1;

        /// Request deferred onto the transition queue.
        const REQUEST_QUEUED = 1 << 2;

        /// Queue head applied; still transitioning.
        const QUEUE_ADVANCED = 1 << 3;

        /// Transitioning -> Idle.
        const TRANSITION_FINISHED = 1 << 4;

        /// State returned to its initial value.
        const STATE_RESET = 1 << 5;
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        EffectSet::empty()
    }
}

impl EffectSet {
    /// Whether the call was accepted but changed nothing visible.
    pub fn is_noop(&self) -> bool {
        self.is_empty()
    }

    /// Whether the camera should begin animating toward a new destination.
    pub fn starts_animation(&self) -> bool {
        self.intersects(EffectSet::TRANSITION_STARTED | EffectSet::QUEUE_ADVANCED)
    }

    pub fn became_idle(&self) -> bool {
        self.contains(EffectSet::TRANSITION_FINISHED)
    }

    /// Compact textual form for logs and CLI output.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "noop".to_string();
        }
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("|")
    }
}
