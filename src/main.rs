//! Horizon script runner CLI
//!
//! Plays a navigation script through the state machine and prints the state
//! after every step.
//!
//! Usage:
//!   horizon demos/tour.nav
//!   horizon --content demos/universe.json demos/tour.nav
//!   horizon --json --config horizon.yaml demos/rapid_clicks.nav
//!
//! Logging follows RUST_LOG, falling back to `log_filter` from the config.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use horizon::content::ContentTree;
use horizon::nav::parse_script;
use horizon::{HorizonConfig, ScriptRunner, StepReport};
use tracing_subscriber::EnvFilter;

/// Run a navigation script headless
#[derive(Parser, Debug)]
#[command(name = "horizon")]
#[command(about = "Play a navigation script against The Horizon state machine")]
struct Args {
    /// Script file, one command per line
    script: PathBuf,

    /// YAML config file (missing file means defaults)
    #[arg(long, short = 'c', env = "HORIZON_CONFIG")]
    config: Option<PathBuf>,

    /// Content tree JSON, used to label focused entities
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output step reports as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = HorizonConfig::resolve(args.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let content = args
        .content
        .as_ref()
        .map(ContentTree::load)
        .transpose()
        .context("failed to load content tree")?;
    if let Some(tree) = &content {
        tracing::info!(entities = tree.len(), "content loaded");
    }

    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let steps = parse_script(&source)
        .with_context(|| format!("failed to parse script {}", args.script.display()))?;

    let mut runner = ScriptRunner::new(config.transition.clone(), content);
    for step in &steps {
        let report = runner.run_step(step);
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_report(&report);
        }
    }

    let state = runner.store().state();
    if state.is_transitioning() {
        tracing::info!(
            queued = state.queue_len(),
            "script ended with a transition in flight"
        );
    }
    Ok(())
}

fn print_report(report: &StepReport) {
    let line = report.summary();
    if report.effects.is_noop() {
        println!("{}", line.dimmed());
    } else if report.effects.became_idle() {
        println!("{}", line.green());
    } else if report.snapshot.is_busy() {
        println!("{}", line.yellow());
    } else {
        println!("{line}");
    }
}
