//! Breadcrumb trail: the path from the universe down to the current focus.
//!
//! Built only from the level-gated focus accessors, so a crumb never shows an
//! identifier deeper than the focus level. Every crumb except the last one
//! carries the request that navigates back to it.

use crate::{Focus, FocusLevel, PendingNavigation};
use horizon_content::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrumbKind {
    Universe,
    Galaxy,
    SolarSystem,
    Planet,
    Moon,
}

impl CrumbKind {
    pub fn display_name(self) -> &'static str {
        match self {
            CrumbKind::Universe => "Universe",
            CrumbKind::Galaxy => "Galaxy",
            CrumbKind::SolarSystem => "Solar System",
            CrumbKind::Planet => "Planet",
            CrumbKind::Moon => "Moon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub kind: CrumbKind,
    /// `None` only for the universe crumb.
    pub id: Option<EntityId>,
    /// Request that returns to this crumb; `None` for the current location.
    pub target: Option<PendingNavigation>,
}

impl Breadcrumb {
    pub fn is_current(&self) -> bool {
        self.target.is_none()
    }

    /// Trail for a focus, universe first.
    pub fn trail(focus: &Focus) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            kind: CrumbKind::Universe,
            id: None,
            target: Some(PendingNavigation::Universe),
        }];

        if let Some(id) = focus.galaxy() {
            crumbs.push(Breadcrumb {
                kind: CrumbKind::Galaxy,
                id: Some(id.clone()),
                target: Some(PendingNavigation::galaxy(id.clone())),
            });
        }
        if let Some(id) = focus.solar_system() {
            crumbs.push(Breadcrumb {
                kind: CrumbKind::SolarSystem,
                id: Some(id.clone()),
                target: Some(PendingNavigation::solar_system(id.clone())),
            });
        }
        if let Some(id) = focus.planet() {
            crumbs.push(Breadcrumb {
                kind: CrumbKind::Planet,
                id: Some(id.clone()),
                target: Some(PendingNavigation::planet(id.clone())),
            });
        }
        if let Some(id) = focus.moon() {
            crumbs.push(Breadcrumb {
                kind: CrumbKind::Moon,
                id: Some(id.clone()),
                target: None,
            });
        }

        // A chain with a missing link (e.g. a system focused without a
        // galaxy) still ends at the focused entity.
        let reached = crumbs
            .iter()
            .any(|crumb| Some(crumb.kind) == crumb_kind(focus.level));
        if focus.level != FocusLevel::Universe && !reached {
            if let (Some(kind), Some(id)) = (crumb_kind(focus.level), focus.current_id()) {
                crumbs.push(Breadcrumb {
                    kind,
                    id: Some(id.clone()),
                    target: None,
                });
            }
        }

        if let Some(last) = crumbs.last_mut() {
            last.target = None;
        }
        crumbs
    }
}

fn crumb_kind(level: FocusLevel) -> Option<CrumbKind> {
    match level {
        FocusLevel::Universe => None,
        FocusLevel::Galaxy => Some(CrumbKind::Galaxy),
        FocusLevel::SolarSystem => Some(CrumbKind::SolarSystem),
        FocusLevel::Planet => Some(CrumbKind::Planet),
    }
}
