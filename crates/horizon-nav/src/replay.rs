//! Navigation replay for deterministic state reconstruction.
//!
//! NavigationLog records every navigation call with the frame tick it was
//! issued on, enabling:
//! - Deterministic replay to reconstruct state
//! - Audit trail of user navigation
//! - Reproducing rapid-click sequences in tests

use crate::script::script_word;
use crate::{EffectSet, NavigationState, NavigationStore};
use horizon_content::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One call into the navigation core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "id", rename_all = "kebab-case")]
pub enum NavigationCommand {
    Universe,
    Galaxy(EntityId),
    SolarSystem(EntityId),
    Planet(EntityId),
    /// Empty id clears the moon.
    Moon(EntityId),
    Back,
    Finish,
    Reset,
}

impl NavigationCommand {
    pub fn apply(&self, state: &mut NavigationState) -> EffectSet {
        match self {
            NavigationCommand::Universe => state.navigate_to_universe(),
            NavigationCommand::Galaxy(id) => state.navigate_to_galaxy(id.clone()),
            NavigationCommand::SolarSystem(id) => state.navigate_to_solar_system(id.clone()),
            NavigationCommand::Planet(id) => state.navigate_to_planet(id.clone()),
            NavigationCommand::Moon(id) => state.navigate_to_moon(id.clone()),
            NavigationCommand::Back => state.navigate_back(),
            NavigationCommand::Finish => state.finish_transition(),
            NavigationCommand::Reset => state.reset(),
        }
    }

    pub fn apply_to_store(&self, store: &mut NavigationStore) -> EffectSet {
        match self {
            NavigationCommand::Universe => store.navigate_to_universe(),
            NavigationCommand::Galaxy(id) => store.navigate_to_galaxy(id.clone()),
            NavigationCommand::SolarSystem(id) => store.navigate_to_solar_system(id.clone()),
            NavigationCommand::Planet(id) => store.navigate_to_planet(id.clone()),
            NavigationCommand::Moon(id) => store.navigate_to_moon(id.clone()),
            NavigationCommand::Back => store.navigate_back(),
            NavigationCommand::Finish => store.finish_transition(),
            NavigationCommand::Reset => store.reset(),
        }
    }

    /// Script line for this command (see [`crate::script`]).
    pub fn to_script(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationCommand::Universe => write!(f, "universe"),
            NavigationCommand::Galaxy(id) => write!(f, "galaxy {}", script_word(id.as_str())),
            NavigationCommand::SolarSystem(id) => write!(f, "system {}", script_word(id.as_str())),
            NavigationCommand::Planet(id) => write!(f, "planet {}", script_word(id.as_str())),
            NavigationCommand::Moon(id) if id.is_empty() => write!(f, "moon"),
            NavigationCommand::Moon(id) => write!(f, "moon {}", script_word(id.as_str())),
            NavigationCommand::Back => write!(f, "back"),
            NavigationCommand::Finish => write!(f, "finish"),
            NavigationCommand::Reset => write!(f, "reset"),
        }
    }
}

/// A command with the frame tick it was issued on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedCommand {
    pub tick: u64,
    pub command: NavigationCommand,
}

/// Log of navigation commands for replay.
///
/// # Determinism
///
/// The state machine has no hidden inputs, so replaying the same log always
/// produces the same `NavigationState`, queue included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLog {
    pub session_id: u64,
    pub events: Vec<TimestampedCommand>,
}

impl NavigationLog {
    pub fn new(session_id: u64) -> Self {
        Self {
            session_id,
            events: Vec::new(),
        }
    }

    /// Record a command. No-op calls are kept: they are part of what the
    /// user did and replay must skip them the same way.
    pub fn record(&mut self, tick: u64, command: NavigationCommand) {
        self.events.push(TimestampedCommand { tick, command });
    }

    pub fn replay(&self) -> NavigationState {
        self.replay_to(u64::MAX)
    }

    /// Replay every command issued at or before `target_tick`.
    pub fn replay_to(&self, target_tick: u64) -> NavigationState {
        let mut state = NavigationState::new();
        for event in self.events.iter().take_while(|e| e.tick <= target_tick) {
            event.command.apply(&mut state);
        }
        state
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Commands as script lines.
    pub fn to_script(&self) -> Vec<String> {
        self.events.iter().map(|e| e.command.to_script()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FocusLevel;
    use pretty_assertions::assert_eq;

    fn rapid_clicks() -> NavigationLog {
        let mut log = NavigationLog::new(7);
        log.record(1, NavigationCommand::Galaxy("a".into()));
        log.record(2, NavigationCommand::SolarSystem("s1".into()));
        log.record(3, NavigationCommand::Galaxy("b".into()));
        log.record(20, NavigationCommand::Finish);
        log.record(40, NavigationCommand::Finish);
        log
    }

    #[test]
    fn log_record_and_replay() {
        let log = rapid_clicks();
        assert_eq!(log.len(), 5);

        let state = log.replay();
        assert_eq!(state.focus_level(), FocusLevel::Galaxy);
        assert_eq!(state.focused_galaxy_id(), Some(&"b".into()));
        assert!(state.is_transitioning());
        assert_eq!(state.queue_len(), 0);
    }

    #[test]
    fn log_replay_to_tick() {
        let log = rapid_clicks();

        let state = log.replay_to(3);
        assert_eq!(state.focus_level(), FocusLevel::Galaxy);
        assert_eq!(state.queue_len(), 2);

        let state = log.replay_to(20);
        assert_eq!(state.focus_level(), FocusLevel::SolarSystem);
        assert_eq!(state.queue_len(), 1);
    }

    #[test]
    fn log_determinism() {
        let log = rapid_clicks();
        assert_eq!(log.replay(), log.replay());
    }

    #[test]
    fn log_to_script() {
        let mut log = NavigationLog::new(1);
        log.record(1, NavigationCommand::Moon("".into()));
        log.record(2, NavigationCommand::SolarSystem("sol".into()));
        log.record(3, NavigationCommand::Back);

        assert_eq!(log.to_script(), vec!["moon", "system sol", "back"]);
    }

    #[test]
    fn store_and_state_agree() {
        let log = rapid_clicks();
        let mut store = NavigationStore::new();
        for event in &log.events {
            event.command.apply_to_store(&mut store);
        }
        assert_eq!(store.state(), &log.replay());
    }

    #[test]
    fn log_json_shape() {
        let json = serde_json::to_value(NavigationCommand::Planet("earth".into())).unwrap();
        assert_eq!(json["op"], "planet");
        assert_eq!(json["id"], "earth");
    }
}
