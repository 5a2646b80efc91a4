//! Navigation requests.

use crate::FocusLevel;
use horizon_content::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One requested destination.
///
/// Immutable once created; queued requests are replayed exactly as they
/// arrived. `Back` is resolved to a concrete target level when the request is
/// made, so the queue never holds a relative step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PendingNavigation {
    Universe,
    Galaxy { id: EntityId },
    SolarSystem { id: EntityId },
    /// Also clears any moon sub-focus.
    Planet { id: EntityId },
    /// Moon sub-focus on the planet level; `None` returns to the planet-only
    /// view. Ignored when the focus is not at a planet.
    Moon { id: Option<EntityId> },
    /// Step to a shallower level, clearing every identifier deeper than `to`.
    Back { to: FocusLevel },
}

impl PendingNavigation {
    pub fn galaxy(id: impl Into<EntityId>) -> Self {
        PendingNavigation::Galaxy { id: id.into() }
    }

    pub fn solar_system(id: impl Into<EntityId>) -> Self {
        PendingNavigation::SolarSystem { id: id.into() }
    }

    pub fn planet(id: impl Into<EntityId>) -> Self {
        PendingNavigation::Planet { id: id.into() }
    }

    /// An empty id means "clear the moon".
    pub fn moon(id: impl Into<EntityId>) -> Self {
        let id = id.into();
        PendingNavigation::Moon {
            id: (!id.is_empty()).then_some(id),
        }
    }

    /// Level this request targets. A moon request targets the planet level
    /// and only takes effect there.
    pub fn level(&self) -> FocusLevel {
        match self {
            PendingNavigation::Universe => FocusLevel::Universe,
            PendingNavigation::Galaxy { .. } => FocusLevel::Galaxy,
            PendingNavigation::SolarSystem { .. } => FocusLevel::SolarSystem,
            PendingNavigation::Planet { .. } | PendingNavigation::Moon { .. } => FocusLevel::Planet,
            PendingNavigation::Back { to } => *to,
        }
    }
}

impl fmt::Display for PendingNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingNavigation::Universe => write!(f, "universe"),
            PendingNavigation::Galaxy { id } => write!(f, "galaxy {id}"),
            PendingNavigation::SolarSystem { id } => write!(f, "solar-system {id}"),
            PendingNavigation::Planet { id } => write!(f, "planet {id}"),
            PendingNavigation::Moon { id: Some(id) } => write!(f, "moon {id}"),
            PendingNavigation::Moon { id: None } => write!(f, "moon (cleared)"),
            PendingNavigation::Back { to } => write!(f, "back to {to}"),
        }
    }
}
