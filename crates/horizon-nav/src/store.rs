//! Observable navigation store.
//!
//! Owns the single [`NavigationState`] and publishes an immutable
//! [`NavigationSnapshot`] through a `tokio::sync::watch` channel after every
//! operation that changed something. One operation produces at most one
//! snapshot, so subscribers never see a level paired with a stale id.
//!
//! The watch channel is used synchronously: `send_replace` on the writer
//! side, `has_changed()` / `borrow_and_update()` on the reader side. No async
//! runtime is needed.

use crate::{EffectSet, Focus, FocusLevel, NavigationState, PendingNavigation};
use horizon_content::EntityId;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Read-only view of the navigation state at one revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    /// Increments once per effective operation.
    pub revision: u64,
    pub focus: Focus,
    pub is_transitioning: bool,
    pub queue_len: usize,
    /// Effects of the operation that produced this snapshot.
    pub effects: EffectSet,
}

impl NavigationSnapshot {
    fn capture(state: &NavigationState, revision: u64, effects: EffectSet) -> Self {
        Self {
            revision,
            focus: state.focus().clone(),
            is_transitioning: state.is_transitioning(),
            queue_len: state.queue_len(),
            effects,
        }
    }

    pub fn focus_level(&self) -> FocusLevel {
        self.focus.level
    }

    /// Busy indicator: a transition is in flight or requests are waiting.
    pub fn is_busy(&self) -> bool {
        self.is_transitioning || self.queue_len > 0
    }
}

pub type SnapshotReceiver = watch::Receiver<NavigationSnapshot>;

/// Owner of the navigation state plus its subscribers.
#[derive(Debug)]
pub struct NavigationStore {
    state: NavigationState,
    revision: u64,
    sender: watch::Sender<NavigationSnapshot>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStore {
    pub fn new() -> Self {
        let state = NavigationState::new();
        let (sender, _receiver) =
            watch::channel(NavigationSnapshot::capture(&state, 0, EffectSet::empty()));
        Self {
            state,
            revision: 0,
            sender,
        }
    }

    /// Subscribe to snapshots. The receiver starts at the current snapshot,
    /// marked as seen.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_nav::NavigationStore;
    ///
    /// let mut store = NavigationStore::new();
    /// let mut rx = store.subscribe();
    ///
    /// store.navigate_to_galaxy("milky-way");
    ///
    /// assert!(rx.has_changed().unwrap());
    /// let snapshot = rx.borrow_and_update().clone();
    /// assert!(snapshot.is_transitioning);
    /// ```
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.sender.borrow().clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn update(&mut self, f: impl FnOnce(&mut NavigationState) -> EffectSet) -> EffectSet {
        let effects = f(&mut self.state);
        if !effects.is_noop() {
            self.revision += 1;
            self.sender.send_replace(NavigationSnapshot::capture(
                &self.state,
                self.revision,
                effects,
            ));
        }
        effects
    }

    pub fn navigate(&mut self, request: PendingNavigation) -> EffectSet {
        self.update(|state| state.navigate(request))
    }

    pub fn navigate_to_universe(&mut self) -> EffectSet {
        self.update(NavigationState::navigate_to_universe)
    }

    pub fn navigate_to_galaxy(&mut self, galaxy_id: impl Into<EntityId>) -> EffectSet {
        let galaxy_id = galaxy_id.into();
        self.update(|state| state.navigate_to_galaxy(galaxy_id))
    }

    pub fn navigate_to_solar_system(&mut self, system_id: impl Into<EntityId>) -> EffectSet {
        let system_id = system_id.into();
        self.update(|state| state.navigate_to_solar_system(system_id))
    }

    pub fn navigate_to_planet(&mut self, planet_id: impl Into<EntityId>) -> EffectSet {
        let planet_id = planet_id.into();
        self.update(|state| state.navigate_to_planet(planet_id))
    }

    pub fn navigate_to_moon(&mut self, moon_id: impl Into<EntityId>) -> EffectSet {
        let moon_id = moon_id.into();
        self.update(|state| state.navigate_to_moon(moon_id))
    }

    pub fn navigate_back(&mut self) -> EffectSet {
        self.update(NavigationState::navigate_back)
    }

    pub fn finish_transition(&mut self) -> EffectSet {
        self.update(NavigationState::finish_transition)
    }

    pub fn set_transitioning(&mut self, transitioning: bool) -> EffectSet {
        self.update(|state| state.set_transitioning(transitioning))
    }

    pub fn reset(&mut self) -> EffectSet {
        self.update(NavigationState::reset)
    }
}
