//! End-to-end: config and content from disk, script through the runner.

use horizon::content::ContentTree;
use horizon::nav::{parse_script, EffectSet, FocusLevel};
use horizon::{HorizonConfig, ScriptRunner};
use pretty_assertions::assert_eq;
use std::io::Write;

const UNIVERSE: &str = include_str!("../demos/universe.json");
const TOUR: &str = include_str!("../demos/tour.nav");

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn demo_tour_ends_idle_at_expected_focus() {
    let content = ContentTree::from_json_str(UNIVERSE).unwrap();
    let steps = parse_script(TOUR).unwrap();
    let mut runner = ScriptRunner::new(HorizonConfig::default().transition, Some(content));

    let reports = runner.run(&steps);
    let last = reports.last().unwrap();

    assert!(!last.snapshot.is_transitioning);
    assert_eq!(last.snapshot.queue_len, 0);
    assert_eq!(last.snapshot.focus_level(), FocusLevel::SolarSystem);
    assert_eq!(last.path, vec!["The Horizon", "Milky Way", "Sol"]);
    assert!(reports.iter().all(|r| !r.path.contains(&"not found".to_string())));
}

#[test]
fn content_and_config_load_from_files() {
    let content_file = write_temp(UNIVERSE);
    let config_file = write_temp("transition:\n  base_secs: 0.1\n  per_level_secs: 0.0\n");

    let config = HorizonConfig::load(config_file.path()).unwrap();
    let content = ContentTree::load(content_file.path()).unwrap();
    assert!(content.contains(&"earth".into()));

    let steps = parse_script("planet earth\nsettle\n").unwrap();
    let mut runner = ScriptRunner::new(config.transition, Some(content));
    let reports = runner.run(&steps);

    // 0.1s at 60fps, give or take float accumulation
    let frames = reports[1].frames.unwrap();
    assert!((6..=8).contains(&frames), "settled in {frames} frames");
    assert!(reports[1].effects.became_idle());
}

#[test]
fn repeated_request_after_settle_is_noop() {
    let steps = parse_script("galaxy x\nsettle\ngalaxy x\ngalaxy x\n").unwrap();
    let mut runner = ScriptRunner::new(Default::default(), None);
    let reports = runner.run(&steps);

    assert_eq!(reports[2].effects, EffectSet::empty());
    assert_eq!(reports[3].effects, EffectSet::empty());
    assert_eq!(reports[3].snapshot, reports[1].snapshot);
}

#[test]
fn reset_mid_queue_restores_initial() {
    let steps = parse_script("galaxy a\nsystem s\nplanet p\nreset\nsettle\n").unwrap();
    let mut runner = ScriptRunner::new(Default::default(), None);
    let reports = runner.run(&steps);

    assert!(reports[3].effects.contains(EffectSet::STATE_RESET));
    assert_eq!(reports[3].path, vec!["Universe"]);
    assert_eq!(reports[4].frames, Some(0));
    assert_eq!(runner.log().replay(), *runner.store().state());
}
