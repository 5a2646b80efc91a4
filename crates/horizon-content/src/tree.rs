//! The content tree and its id index.

use crate::{ContentError, ContentResult, EntityId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// CONTENT FILE SHAPE
// ============================================================================

/// Root of the content file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub galaxies: Vec<Galaxy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Galaxy {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub solar_systems: Vec<SolarSystem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display name of the central star, when the content names one
    #[serde(default)]
    pub star: Option<String>,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub moons: Vec<Moon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// INDEXED TREE
// ============================================================================

/// Position of an entity inside the nested vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Galaxy(usize),
    SolarSystem(usize, usize),
    Planet(usize, usize, usize),
    Moon(usize, usize, usize, usize),
}

/// Ancestry of one entity, from galaxy down to the entity itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPath {
    pub galaxy_id: Option<EntityId>,
    pub solar_system_id: Option<EntityId>,
    pub planet_id: Option<EntityId>,
    pub moon_id: Option<EntityId>,
}

/// Read-only content tree with O(1) lookup by id.
///
/// Ids are unique across the whole tree, not just within a level.
#[derive(Debug, Clone, Default)]
pub struct ContentTree {
    universe: Universe,
    index: HashMap<EntityId, Slot>,
}

impl ContentTree {
    /// Index a parsed universe. Fails on the first duplicate id.
    pub fn new(universe: Universe) -> ContentResult<Self> {
        let mut index = HashMap::new();
        let mut insert = |id: &EntityId, slot: Slot| {
            if index.insert(id.clone(), slot).is_some() {
                return Err(ContentError::DuplicateId(id.clone()));
            }
            Ok(())
        };

        for (gi, galaxy) in universe.galaxies.iter().enumerate() {
            insert(&galaxy.id, Slot::Galaxy(gi))?;
            for (si, system) in galaxy.solar_systems.iter().enumerate() {
                insert(&system.id, Slot::SolarSystem(gi, si))?;
                for (pi, planet) in system.planets.iter().enumerate() {
                    insert(&planet.id, Slot::Planet(gi, si, pi))?;
                    for (mi, moon) in planet.moons.iter().enumerate() {
                        insert(&moon.id, Slot::Moon(gi, si, pi, mi))?;
                    }
                }
            }
        }

        tracing::debug!(
            galaxies = universe.galaxies.len(),
            entities = index.len(),
            "content tree indexed"
        );

        Ok(Self { universe, index })
    }

    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let universe: Universe = serde_json::from_str(json)?;
        Self::new(universe)
    }

    pub fn load(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.index.contains_key(id)
    }

    pub fn galaxy(&self, id: &EntityId) -> Option<&Galaxy> {
        match self.index.get(id)? {
            Slot::Galaxy(gi) => self.universe.galaxies.get(*gi),
            _ => None,
        }
    }

    pub fn solar_system(&self, id: &EntityId) -> Option<&SolarSystem> {
        match self.index.get(id)? {
            Slot::SolarSystem(gi, si) => self.universe.galaxies.get(*gi)?.solar_systems.get(*si),
            _ => None,
        }
    }

    pub fn planet(&self, id: &EntityId) -> Option<&Planet> {
        match self.index.get(id)? {
            Slot::Planet(gi, si, pi) => self
                .universe
                .galaxies
                .get(*gi)?
                .solar_systems
                .get(*si)?
                .planets
                .get(*pi),
            _ => None,
        }
    }

    pub fn moon(&self, id: &EntityId) -> Option<&Moon> {
        match self.index.get(id)? {
            Slot::Moon(gi, si, pi, mi) => self
                .universe
                .galaxies
                .get(*gi)?
                .solar_systems
                .get(*si)?
                .planets
                .get(*pi)?
                .moons
                .get(*mi),
            _ => None,
        }
    }

    /// Display name for any id, regardless of level.
    pub fn name_of(&self, id: &EntityId) -> Option<&str> {
        let name = match self.index.get(id)? {
            Slot::Galaxy(_) => &self.galaxy(id)?.name,
            Slot::SolarSystem(..) => &self.solar_system(id)?.name,
            Slot::Planet(..) => &self.planet(id)?.name,
            Slot::Moon(..) => &self.moon(id)?.name,
        };
        Some(name.as_str())
    }

    /// Ancestry of an entity, used by search-style jumps that need the
    /// enclosing galaxy and system of a deep id.
    pub fn path_to(&self, id: &EntityId) -> Option<ContentPath> {
        let galaxies = &self.universe.galaxies;
        let path = match *self.index.get(id)? {
            Slot::Galaxy(gi) => ContentPath {
                galaxy_id: Some(galaxies.get(gi)?.id.clone()),
                ..Default::default()
            },
            Slot::SolarSystem(gi, si) => {
                let galaxy = galaxies.get(gi)?;
                ContentPath {
                    galaxy_id: Some(galaxy.id.clone()),
                    solar_system_id: Some(galaxy.solar_systems.get(si)?.id.clone()),
                    ..Default::default()
                }
            }
            Slot::Planet(gi, si, pi) => {
                let galaxy = galaxies.get(gi)?;
                let system = galaxy.solar_systems.get(si)?;
                ContentPath {
                    galaxy_id: Some(galaxy.id.clone()),
                    solar_system_id: Some(system.id.clone()),
                    planet_id: Some(system.planets.get(pi)?.id.clone()),
                    moon_id: None,
                }
            }
            Slot::Moon(gi, si, pi, mi) => {
                let galaxy = galaxies.get(gi)?;
                let system = galaxy.solar_systems.get(si)?;
                let planet = system.planets.get(pi)?;
                ContentPath {
                    galaxy_id: Some(galaxy.id.clone()),
                    solar_system_id: Some(system.id.clone()),
                    planet_id: Some(planet.id.clone()),
                    moon_id: Some(planet.moons.get(mi)?.id.clone()),
                }
            }
        };
        Some(path)
    }
}
