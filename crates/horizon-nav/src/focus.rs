//! Focus levels of the exploration hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the currently displayed view.
///
/// A moon is not a level of its own: it is a sub-focus layered onto
/// [`FocusLevel::Planet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum FocusLevel {
    #[default]
    Universe,
    Galaxy,
    SolarSystem,
    Planet,
}

impl FocusLevel {
    pub const ALL: [FocusLevel; 4] = [
        FocusLevel::Universe,
        FocusLevel::Galaxy,
        FocusLevel::SolarSystem,
        FocusLevel::Planet,
    ];

    /// Depth below the universe (universe = 0).
    pub fn depth(self) -> u8 {
        match self {
            FocusLevel::Universe => 0,
            FocusLevel::Galaxy => 1,
            FocusLevel::SolarSystem => 2,
            FocusLevel::Planet => 3,
        }
    }

    /// The next shallower level, `None` at the universe.
    pub fn parent(self) -> Option<FocusLevel> {
        match self {
            FocusLevel::Universe => None,
            FocusLevel::Galaxy => Some(FocusLevel::Universe),
            FocusLevel::SolarSystem => Some(FocusLevel::Galaxy),
            FocusLevel::Planet => Some(FocusLevel::SolarSystem),
        }
    }

    /// The next deeper level, `None` at the planet.
    pub fn child(self) -> Option<FocusLevel> {
        match self {
            FocusLevel::Universe => Some(FocusLevel::Galaxy),
            FocusLevel::Galaxy => Some(FocusLevel::SolarSystem),
            FocusLevel::SolarSystem => Some(FocusLevel::Planet),
            FocusLevel::Planet => None,
        }
    }

    /// Number of levels between two levels (used for transition timing).
    pub fn distance(self, other: FocusLevel) -> u8 {
        self.depth().abs_diff(other.depth())
    }

    /// Whether this level is at least as deep as `other`.
    pub fn reaches(self, other: FocusLevel) -> bool {
        self.depth() >= other.depth()
    }

    /// Stable wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FocusLevel::Universe => "universe",
            FocusLevel::Galaxy => "galaxy",
            FocusLevel::SolarSystem => "solar-system",
            FocusLevel::Planet => "planet",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FocusLevel::Universe => "Universe",
            FocusLevel::Galaxy => "Galaxy",
            FocusLevel::SolarSystem => "Solar System",
            FocusLevel::Planet => "Planet",
        }
    }
}

impl fmt::Display for FocusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
