//! Navigation HUD: breadcrumb bar, back button, busy indicator.
//!
//! Follows the extract-then-render pattern: [`HudData`] is built from a
//! store snapshot before the frame, [`hud_bar`] draws it and returns a
//! [`HudAction`]. The widget never reads or mutates the store itself.

use crate::HudConfig;
use egui::{RichText, Ui};
use horizon_content::ContentTree;
use horizon_nav::{
    Breadcrumb, CrumbKind, EffectSet, EntityId, FocusLevel, NavigationSnapshot, NavigationStore,
    PendingNavigation,
};

/// Label shown for an id the content tree does not know.
pub const NOT_FOUND: &str = "not found";

/// One rendered breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrumbLabel {
    pub kind: CrumbKind,
    pub text: String,
    /// Request issued when clicked; `None` for the current location.
    pub target: Option<PendingNavigation>,
}

/// Data needed to render the HUD (extracted before render)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudData {
    pub crumbs: Vec<CrumbLabel>,
    pub level: FocusLevel,
    /// Transition in flight or requests waiting.
    pub is_busy: bool,
    pub queue_len: usize,
    pub config: HudConfig,
}

impl HudData {
    /// Build from a snapshot. With a content tree, labels are entity names
    /// and unknown ids read [`NOT_FOUND`]; without one, labels are raw ids.
    pub fn extract(
        snapshot: &NavigationSnapshot,
        content: Option<&ContentTree>,
        config: &HudConfig,
    ) -> Self {
        let crumbs = Breadcrumb::trail(&snapshot.focus)
            .into_iter()
            .map(|crumb| CrumbLabel {
                kind: crumb.kind,
                text: crumb_text(&crumb, content),
                target: crumb.target,
            })
            .collect();

        Self {
            crumbs,
            level: snapshot.focus_level(),
            is_busy: snapshot.is_busy(),
            queue_len: snapshot.queue_len,
            config: config.clone(),
        }
    }

    /// Text of the current location, e.g. for a window title.
    pub fn current_label(&self) -> &str {
        self.crumbs
            .last()
            .map(|crumb| crumb.text.as_str())
            .unwrap_or(CrumbKind::Universe.display_name())
    }
}

fn crumb_text(crumb: &Breadcrumb, content: Option<&ContentTree>) -> String {
    match (&crumb.id, content) {
        (None, Some(tree)) if !tree.universe().name.is_empty() => tree.universe().name.clone(),
        (None, _) => crumb.kind.display_name().to_string(),
        (Some(id), Some(tree)) => name_for_kind(tree, crumb.kind, id)
            .unwrap_or(NOT_FOUND)
            .to_string(),
        (Some(id), None) => id.to_string(),
    }
}

/// Name of `id` as an entity of `kind`; an id of another kind is not found.
fn name_for_kind<'a>(tree: &'a ContentTree, kind: CrumbKind, id: &EntityId) -> Option<&'a str> {
    let name = match kind {
        CrumbKind::Universe => return None,
        CrumbKind::Galaxy => &tree.galaxy(id)?.name,
        CrumbKind::SolarSystem => &tree.solar_system(id)?.name,
        CrumbKind::Planet => &tree.planet(id)?.name,
        CrumbKind::Moon => &tree.moon(id)?.name,
    };
    Some(name.as_str())
}

/// What the user asked the navigation core to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Navigate(PendingNavigation),
    Back,
}

impl NavigationIntent {
    pub fn apply(self, store: &mut NavigationStore) -> EffectSet {
        match self {
            NavigationIntent::Navigate(request) => store.navigate(request),
            NavigationIntent::Back => store.navigate_back(),
        }
    }
}

/// Actions that can be triggered from the HUD
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HudAction {
    pub intent: Option<NavigationIntent>,
}

pub fn hud_bar(ui: &mut Ui, data: &HudData) -> HudAction {
    let mut action = HudAction::default();

    ui.horizontal(|ui| {
        ui.set_height(28.0);

        if data.level != FocusLevel::Universe && ui.small_button("<").clicked() {
            action.intent = Some(NavigationIntent::Back);
        }

        if data.config.show_breadcrumb {
            for (index, crumb) in data.crumbs.iter().enumerate() {
                if index > 0 {
                    ui.label(RichText::new(">").weak().small());
                }
                match &crumb.target {
                    Some(target) => {
                        if ui.small_button(crumb.text.as_str()).clicked() {
                            action.intent = Some(NavigationIntent::Navigate(target.clone()));
                        }
                    }
                    None => {
                        ui.label(RichText::new(&crumb.text).strong());
                    }
                }
            }
        } else {
            ui.label(RichText::new(data.current_label()).strong());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if data.config.show_busy_indicator && data.is_busy {
                ui.spinner();
            }
            if data.config.show_queue_depth && data.queue_len > 0 {
                ui.label(RichText::new(format!("queued: {}", data.queue_len)).small());
            }
        });
    });

    if let Some(intent) = &action.intent {
        tracing::debug!(?intent, "hud intent");
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONTENT: &str = r#"{
        "name": "The Horizon",
        "galaxies": [{
            "id": "milky-way",
            "name": "Milky Way",
            "solarSystems": [{
                "id": "sol",
                "name": "Sol",
                "planets": [{
                    "id": "earth",
                    "name": "Earth",
                    "moons": [{ "id": "luna", "name": "Luna" }]
                }]
            }]
        }]
    }"#;

    fn at_earth() -> NavigationStore {
        let mut store = NavigationStore::new();
        store.navigate_to_galaxy("milky-way");
        store.finish_transition();
        store.navigate_to_solar_system("sol");
        store.finish_transition();
        store.navigate_to_planet("earth");
        store.finish_transition();
        store
    }

    fn run_hud(data: &HudData) -> HudAction {
        let ctx = egui::Context::default();
        let mut action = HudAction::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = hud_bar(ui, data);
            });
        });
        action
    }

    #[test]
    fn extract_uses_content_names() {
        let tree = ContentTree::from_json_str(CONTENT).unwrap();
        let store = at_earth();
        let data = HudData::extract(&store.snapshot(), Some(&tree), &HudConfig::default());

        let texts: Vec<_> = data.crumbs.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["The Horizon", "Milky Way", "Sol", "Earth"]);
        assert_eq!(data.current_label(), "Earth");
        assert!(!data.is_busy);
    }

    #[test]
    fn unknown_id_reads_not_found() {
        let tree = ContentTree::from_json_str(CONTENT).unwrap();
        let mut store = NavigationStore::new();
        store.navigate_to_galaxy("andromeda");

        let data = HudData::extract(&store.snapshot(), Some(&tree), &HudConfig::default());
        assert_eq!(data.current_label(), NOT_FOUND);
        assert!(data.is_busy);
    }

    #[test]
    fn id_of_another_kind_reads_not_found() {
        let tree = ContentTree::from_json_str(CONTENT).unwrap();
        let mut store = NavigationStore::new();
        // "earth" exists, but as a planet
        store.navigate_to_galaxy("earth");

        let data = HudData::extract(&store.snapshot(), Some(&tree), &HudConfig::default());
        assert_eq!(data.crumbs[1].kind, CrumbKind::Galaxy);
        assert_eq!(data.current_label(), NOT_FOUND);
    }

    #[test]
    fn without_content_labels_are_ids() {
        let store = at_earth();
        let data = HudData::extract(&store.snapshot(), None, &HudConfig::default());
        assert_eq!(data.crumbs[0].text, "Universe");
        assert_eq!(data.crumbs[2].text, "sol");
    }

    #[test]
    fn ancestors_carry_targets() {
        let store = at_earth();
        let data = HudData::extract(&store.snapshot(), None, &HudConfig::default());
        assert_eq!(data.crumbs[0].target, Some(PendingNavigation::Universe));
        assert_eq!(
            data.crumbs[1].target,
            Some(PendingNavigation::galaxy("milky-way"))
        );
        assert!(data.crumbs[3].target.is_none());
    }

    #[test]
    fn intent_applies_through_store() {
        let mut store = at_earth();
        let effects = NavigationIntent::Back.apply(&mut store);
        assert!(effects.starts_animation());
        assert_eq!(store.state().focus_level(), FocusLevel::SolarSystem);

        let effects = NavigationIntent::Navigate(PendingNavigation::Universe).apply(&mut store);
        assert_eq!(effects, EffectSet::REQUEST_QUEUED);
    }

    #[test]
    fn hud_renders_headless_without_intent() {
        let store = at_earth();
        let data = HudData::extract(&store.snapshot(), None, &HudConfig::verbose());
        assert_eq!(run_hud(&data), HudAction::default());

        let hidden = HudConfig {
            show_breadcrumb: false,
            ..Default::default()
        };
        let data = HudData::extract(&store.snapshot(), None, &hidden);
        assert_eq!(run_hud(&data), HudAction::default());
    }
}
