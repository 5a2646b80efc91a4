//! Headless script runner.
//!
//! Plays a parsed navigation script against a [`NavigationStore`], standing
//! in for the rendering layer: `finish` completes a transition directly and
//! `settle` lets the [`TransitionDriver`] animate at a fixed frame rate until
//! the store is idle. Every step yields a [`StepReport`].

use horizon_content::ContentTree;
use horizon_egui::{HudConfig, HudData};
use horizon_nav::{
    EffectSet, NavigationCommand, NavigationLog, NavigationSnapshot, NavigationStore,
    ScriptAction, ScriptStep, TransitionDriver, TransitionTiming,
};
use serde::Serialize;

/// Seconds per simulated frame.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// One minute of frames; `settle` gives up after this.
pub const SETTLE_MAX_FRAMES: usize = 60 * 60;

/// Outcome of one script step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub line: usize,
    /// Script text of the step.
    pub step: String,
    pub effects: EffectSet,
    /// Frames run, for `settle` steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<usize>,
    /// Breadcrumb path after the step, universe first.
    pub path: Vec<String>,
    pub snapshot: NavigationSnapshot,
}

impl StepReport {
    /// One-line human readable form.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{:>3}  {:<18} {:<12} {}  transitioning={} queue={} [{}]",
            self.line,
            self.step,
            self.snapshot.focus_level(),
            self.path.join(" > "),
            self.snapshot.is_transitioning,
            self.snapshot.queue_len,
            self.effects.describe(),
        );
        if let Some(frames) = self.frames {
            line.push_str(&format!(" frames={frames}"));
        }
        line
    }
}

pub struct ScriptRunner {
    store: NavigationStore,
    driver: TransitionDriver,
    content: Option<ContentTree>,
    log: NavigationLog,
    /// Simulated frame counter, used as the log tick.
    tick: u64,
}

impl ScriptRunner {
    pub fn new(timing: TransitionTiming, content: Option<ContentTree>) -> Self {
        Self {
            store: NavigationStore::new(),
            driver: TransitionDriver::new(timing),
            content,
            log: NavigationLog::new(1),
            tick: 0,
        }
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn log(&self) -> &NavigationLog {
        &self.log
    }

    pub fn run_step(&mut self, step: &ScriptStep) -> StepReport {
        let (text, effects, frames) = match &step.action {
            ScriptAction::Command(command) => {
                let effects = self.apply(command);
                (command.to_script(), effects, None)
            }
            ScriptAction::Settle => {
                let (effects, frames) = self.settle();
                ("settle".to_string(), effects, Some(frames))
            }
        };

        let snapshot = self.store.snapshot();
        let path = HudData::extract(&snapshot, self.content.as_ref(), &HudConfig::default())
            .crumbs
            .into_iter()
            .map(|crumb| crumb.text)
            .collect();

        StepReport {
            line: step.line,
            step: text,
            effects,
            frames,
            path,
            snapshot,
        }
    }

    pub fn run(&mut self, steps: &[ScriptStep]) -> Vec<StepReport> {
        steps.iter().map(|step| self.run_step(step)).collect()
    }

    fn apply(&mut self, command: &NavigationCommand) -> EffectSet {
        self.log.record(self.tick, command.clone());
        command.apply_to_store(&mut self.store)
    }

    /// Effects are the union over every frame that completed a transition.
    fn settle(&mut self) -> (EffectSet, usize) {
        let mut effects = EffectSet::empty();
        let mut frames = 0;
        while self.store.state().is_transitioning() && frames < SETTLE_MAX_FRAMES {
            let finished = self.driver.tick(&mut self.store, FRAME_DT);
            if !finished.is_noop() {
                self.log.record(self.tick, NavigationCommand::Finish);
            }
            effects |= finished;
            frames += 1;
            self.tick += 1;
        }
        if self.store.state().is_transitioning() {
            tracing::warn!(frames, "settle stopped before the store went idle");
        }
        (effects, frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_nav::{parse_script, FocusLevel};
    use pretty_assertions::assert_eq;

    const CONTENT: &str = r#"{
        "name": "The Horizon",
        "galaxies": [{
            "id": "milky-way",
            "name": "Milky Way",
            "solarSystems": [{
                "id": "sol",
                "name": "Sol",
                "planets": [{ "id": "earth", "name": "Earth" }]
            }]
        }]
    }"#;

    fn run(source: &str, content: Option<ContentTree>) -> (ScriptRunner, Vec<StepReport>) {
        let steps = parse_script(source).unwrap();
        let mut runner = ScriptRunner::new(TransitionTiming::default(), content);
        let reports = runner.run(&steps);
        (runner, reports)
    }

    #[test]
    fn rapid_clicks_then_settle() {
        let (_, reports) = run("galaxy a\nsystem s1\ngalaxy b\nsettle\n", None);

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[1].effects, EffectSet::REQUEST_QUEUED);
        assert_eq!(reports[2].snapshot.queue_len, 2);

        let settled = &reports[3];
        assert!(!settled.snapshot.is_transitioning);
        assert_eq!(settled.snapshot.focus_level(), FocusLevel::Galaxy);
        assert_eq!(settled.path, vec!["Universe", "b"]);
        assert!(settled.effects.contains(EffectSet::QUEUE_ADVANCED));
        assert!(settled.effects.became_idle());
        assert!(settled.frames.unwrap() > 0);
    }

    #[test]
    fn log_replays_to_same_state() {
        let (runner, _) = run("galaxy a\nplanet p\nsettle\nback\nfinish\n", None);
        assert_eq!(runner.log().replay(), *runner.store().state());
    }

    #[test]
    fn content_labels_and_not_found() {
        let tree = ContentTree::from_json_str(CONTENT).unwrap();
        let (_, reports) = run(
            "galaxy milky-way\nsettle\nsystem sol\nsettle\nsystem vega\n",
            Some(tree),
        );

        assert_eq!(reports[3].path, vec!["The Horizon", "Milky Way", "Sol"]);
        assert_eq!(reports[4].path, vec!["The Horizon", "Milky Way", "not found"]);
    }

    #[test]
    fn settle_when_idle_runs_no_frames() {
        let (_, reports) = run("settle\n", None);
        assert_eq!(reports[0].frames, Some(0));
        assert!(reports[0].effects.is_noop());
    }

    #[test]
    fn summary_line() {
        let (_, reports) = run("galaxy a\n", None);
        let line = reports[0].summary();
        assert!(line.contains("galaxy a"));
        assert!(line.contains("transitioning=true"));
        assert!(line.contains("focus_changed|transition_started"));
    }

    #[test]
    fn report_serializes_camel_case() {
        let (_, reports) = run("galaxy a\n", None);
        let json = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(json["snapshot"]["isTransitioning"], true);
        assert_eq!(json["snapshot"]["focus"]["galaxyId"], "a");
        assert!(json.get("frames").is_none());
    }
}
