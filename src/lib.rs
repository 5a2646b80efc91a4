//! The Horizon
//!
//! Navigation core for a universe explorer: focus moves between the
//! universe, a galaxy, a solar system and a planet (with an optional moon
//! sub-focus), one animated transition at a time.
//!
//! - [`horizon_content`]: the read-only content tree
//! - [`horizon_nav`]: state machine, observable store, transition driver
//! - [`horizon_egui`]: camera and HUD widgets
//!
//! This crate adds configuration and the headless script runner behind the
//! `horizon` binary.

pub mod config;
pub mod runner;

pub use config::{ConfigError, HorizonConfig, CONFIG_ENV};
pub use runner::{ScriptRunner, StepReport, FRAME_DT, SETTLE_MAX_FRAMES};

pub use horizon_content as content;
pub use horizon_nav as nav;
