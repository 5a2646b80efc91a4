//! Navigation state machine.
//!
//! Exactly one transition is in flight at a time. Requests arriving while a
//! transition is running are queued FIFO and applied one at a time, each on
//! the `finish_transition()` of the previous one. The focus fields always
//! show the destination of the in-flight transition, never its origin.

use crate::{EffectSet, FocusLevel, PendingNavigation};
use horizon_content::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Focused destination: level plus the identifiers recorded at each depth.
///
/// The raw fields may retain deeper identifiers after a shallower
/// navigation. Readers that render the current location should use the
/// level-gated accessors, which never expose an id deeper than `level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Focus {
    pub level: FocusLevel,
    pub galaxy_id: Option<EntityId>,
    pub solar_system_id: Option<EntityId>,
    pub planet_id: Option<EntityId>,
    pub moon_id: Option<EntityId>,
}

impl Focus {
    /// Galaxy id, if the level reaches the galaxy.
    pub fn galaxy(&self) -> Option<&EntityId> {
        self.gated(FocusLevel::Galaxy, self.galaxy_id.as_ref())
    }

    /// Solar system id, if the level reaches it and a galaxy is focused.
    pub fn solar_system(&self) -> Option<&EntityId> {
        self.galaxy()?;
        self.gated(FocusLevel::SolarSystem, self.solar_system_id.as_ref())
    }

    /// Planet id, if the level is planet and a solar system is focused.
    pub fn planet(&self) -> Option<&EntityId> {
        self.solar_system()?;
        self.gated(FocusLevel::Planet, self.planet_id.as_ref())
    }

    /// Moon sub-focus, only when a planet is focused.
    pub fn moon(&self) -> Option<&EntityId> {
        self.planet()?;
        self.moon_id.as_ref()
    }

    /// Id of the innermost focused entity at the current level, ignoring
    /// the moon sub-focus. Unlike the chained accessors this does not
    /// require the shallower ids to be present.
    pub fn current_id(&self) -> Option<&EntityId> {
        match self.level {
            FocusLevel::Universe => None,
            FocusLevel::Galaxy => self.galaxy_id.as_ref(),
            FocusLevel::SolarSystem => self.solar_system_id.as_ref(),
            FocusLevel::Planet => self.planet_id.as_ref(),
        }
    }

    fn gated<'a>(&self, depth: FocusLevel, id: Option<&'a EntityId>) -> Option<&'a EntityId> {
        if self.level.reaches(depth) {
            id
        } else {
            None
        }
    }

    /// Apply a request's destination. Returns whether anything changed.
    pub(crate) fn apply(&mut self, request: &PendingNavigation) -> bool {
        let before = self.clone();
        match request {
            PendingNavigation::Universe => {
                self.level = FocusLevel::Universe;
            }
            PendingNavigation::Galaxy { id } => {
                self.level = FocusLevel::Galaxy;
                self.galaxy_id = Some(id.clone());
            }
            PendingNavigation::SolarSystem { id } => {
                self.level = FocusLevel::SolarSystem;
                self.solar_system_id = Some(id.clone());
            }
            PendingNavigation::Planet { id } => {
                self.level = FocusLevel::Planet;
                self.planet_id = Some(id.clone());
                self.moon_id = None;
            }
            PendingNavigation::Moon { id } => {
                // Moons hang off the focused planet; elsewhere there is none
                if self.level == FocusLevel::Planet {
                    self.moon_id = id.clone();
                }
            }
            PendingNavigation::Back { to } => {
                self.level = *to;
                if !to.reaches(FocusLevel::Planet) {
                    self.planet_id = None;
                    self.moon_id = None;
                }
                if !to.reaches(FocusLevel::SolarSystem) {
                    self.solar_system_id = None;
                }
                if !to.reaches(FocusLevel::Galaxy) {
                    self.galaxy_id = None;
                }
            }
        }
        *self != before
    }

    /// Copy with `request` applied.
    pub fn applied(&self, request: &PendingNavigation) -> Focus {
        let mut next = self.clone();
        next.apply(request);
        next
    }

    /// Target level of a back step from this focus.
    ///
    /// Steps to the parent level; if the identifier owning that level is
    /// missing, keeps stepping until a level with an identifier (or the
    /// universe) is found. `None` at the universe.
    pub fn back_target(&self) -> Option<FocusLevel> {
        let mut level = self.level.parent()?;
        loop {
            let present = match level {
                FocusLevel::Universe => true,
                FocusLevel::Galaxy => self.galaxy_id.is_some(),
                FocusLevel::SolarSystem => self.solar_system_id.is_some(),
                FocusLevel::Planet => self.planet_id.is_some(),
            };
            if present {
                return Some(level);
            }
            level = level.parent()?;
        }
    }
}

/// The single process-wide navigation record.
///
/// Created once at startup; mutated only through the operations below. All
/// operations are total: they never fail and report what happened through
/// the returned [`EffectSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    focus: Focus,
    is_transitioning: bool,
    transition_queue: VecDeque<PendingNavigation>,
}

impl NavigationState {
    /// Universe level, no ids, idle, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn focus_level(&self) -> FocusLevel {
        self.focus.level
    }

    pub fn focused_galaxy_id(&self) -> Option<&EntityId> {
        self.focus.galaxy_id.as_ref()
    }

    pub fn focused_solar_system_id(&self) -> Option<&EntityId> {
        self.focus.solar_system_id.as_ref()
    }

    pub fn focused_planet_id(&self) -> Option<&EntityId> {
        self.focus.planet_id.as_ref()
    }

    pub fn focused_moon_id(&self) -> Option<&EntityId> {
        self.focus.moon_id.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Queued requests in arrival order.
    pub fn transition_queue(&self) -> impl ExactSizeIterator<Item = &PendingNavigation> {
        self.transition_queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.transition_queue.len()
    }

    /// Focus the state will show once every queued request has played.
    pub fn projected_focus(&self) -> Focus {
        self.transition_queue
            .iter()
            .fold(self.focus.clone(), |focus, request| focus.applied(request))
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    pub fn navigate_to_universe(&mut self) -> EffectSet {
        self.navigate(PendingNavigation::Universe)
    }

    pub fn navigate_to_galaxy(&mut self, galaxy_id: impl Into<EntityId>) -> EffectSet {
        self.navigate(PendingNavigation::galaxy(galaxy_id))
    }

    pub fn navigate_to_solar_system(&mut self, system_id: impl Into<EntityId>) -> EffectSet {
        self.navigate(PendingNavigation::solar_system(system_id))
    }

    pub fn navigate_to_planet(&mut self, planet_id: impl Into<EntityId>) -> EffectSet {
        self.navigate(PendingNavigation::planet(planet_id))
    }

    /// Focus a moon of the current planet; an empty id clears the moon.
    ///
    /// The level stays where it is. Applied above the planet level the
    /// request changes nothing.
    pub fn navigate_to_moon(&mut self, moon_id: impl Into<EntityId>) -> EffectSet {
        self.navigate(PendingNavigation::moon(moon_id))
    }

    /// One level shallower, relative to the projected destination.
    ///
    /// No-op when that destination is already the universe.
    pub fn navigate_back(&mut self) -> EffectSet {
        let projected = self.projected_focus();
        match projected.back_target() {
            Some(to) => self.navigate(PendingNavigation::Back { to }),
            None => {
                tracing::trace!("navigate_back at universe ignored");
                EffectSet::empty()
            }
        }
    }

    /// Entry point shared by every navigate operation.
    pub fn navigate(&mut self, request: PendingNavigation) -> EffectSet {
        if self.is_transitioning {
            tracing::debug!(
                request = %request,
                queued = self.transition_queue.len() + 1,
                "transition in flight, request queued"
            );
            self.transition_queue.push_back(request);
            return EffectSet::REQUEST_QUEUED;
        }

        if !self.transition_queue.is_empty() {
            return self.resume_queue(request);
        }

        if !self.focus.apply(&request) {
            tracing::trace!(request = %request, "already at destination");
            return EffectSet::empty();
        }

        self.is_transitioning = true;
        tracing::debug!(request = %request, level = %self.focus.level, "transition started");
        EffectSet::FOCUS_CHANGED | EffectSet::TRANSITION_STARTED
    }

    /// Idle with requests left behind by `set_transitioning(false)`: the
    /// new request goes behind them and the oldest one starts now.
    fn resume_queue(&mut self, request: PendingNavigation) -> EffectSet {
        self.transition_queue.push_back(request);
        let mut effects = EffectSet::REQUEST_QUEUED | EffectSet::TRANSITION_STARTED;
        if let Some(head) = self.transition_queue.pop_front() {
            if self.focus.apply(&head) {
                effects |= EffectSet::FOCUS_CHANGED;
            }
            tracing::debug!(
                request = %head,
                remaining = self.transition_queue.len(),
                "stalled queue resumed"
            );
        }
        self.is_transitioning = true;
        effects
    }

    /// Completion signal from the rendering layer.
    ///
    /// Applies the queue head and stays in flight, or goes idle when the
    /// queue is empty. Harmless no-op when nothing is in flight.
    pub fn finish_transition(&mut self) -> EffectSet {
        if !self.is_transitioning {
            tracing::trace!("finish_transition while idle ignored");
            return EffectSet::empty();
        }

        match self.transition_queue.pop_front() {
            Some(request) => {
                let mut effects = EffectSet::QUEUE_ADVANCED;
                if self.focus.apply(&request) {
                    effects |= EffectSet::FOCUS_CHANGED;
                }
                tracing::debug!(
                    request = %request,
                    remaining = self.transition_queue.len(),
                    "queued transition started"
                );
                effects
            }
            None => {
                self.is_transitioning = false;
                tracing::debug!(level = %self.focus.level, "transition finished");
                EffectSet::TRANSITION_FINISHED
            }
        }
    }

    /// Set the in-flight flag directly. Does not touch focus or queue.
    pub fn set_transitioning(&mut self, transitioning: bool) -> EffectSet {
        if self.is_transitioning == transitioning {
            return EffectSet::empty();
        }
        self.is_transitioning = transitioning;
        if transitioning {
            EffectSet::TRANSITION_STARTED
        } else {
            EffectSet::TRANSITION_FINISHED
        }
    }

    /// Back to the initial state.
    pub fn reset(&mut self) -> EffectSet {
        if *self == Self::default() {
            return EffectSet::empty();
        }
        *self = Self::default();
        tracing::info!("navigation state reset");
        EffectSet::STATE_RESET | EffectSet::FOCUS_CHANGED
    }
}
