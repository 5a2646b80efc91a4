//! Navigation Focus State Machine
//!
//! The core of The Horizon's exploration interface: which level of the
//! universe → galaxy → solar system → planet hierarchy is on screen, which
//! entities are focused, and whether the camera is still flying there.
//!
//! # Architecture
//!
//! ```text
//!   HUD / breadcrumbs ──navigate_to_*──┐
//!                                      ▼
//!                            ┌───────────────────┐   snapshot   ┌──────────┐
//!                            │  NavigationStore  │─────────────►│ watchers │
//!                            │  NavigationState  │   (watch)    └──────────┘
//!                            │  + FIFO queue     │
//!                            └───────────────────┘
//!                                 ▲         │ focus
//!               finish_transition │         ▼
//!                            ┌───────────────────┐
//!                            │ TransitionDriver  │ (camera animation)
//!                            └───────────────────┘
//! ```
//!
//! Invariants:
//! - At most one transition in flight; later requests queue FIFO and are
//!   never reordered, coalesced or dropped.
//! - The focus fields show the destination as soon as a request is
//!   accepted; `is_transitioning` tells whether the camera has caught up.
//! - Requests for the destination already shown while idle are no-ops.
//!
//! No operation can fail. Identifiers are opaque and never looked up here.

mod breadcrumb;
mod effect;
mod focus;
mod replay;
mod request;
pub mod script;
mod state;
mod store;
mod transition;

pub use breadcrumb::{Breadcrumb, CrumbKind};
pub use effect::EffectSet;
pub use focus::FocusLevel;
pub use horizon_content::EntityId;
pub use replay::{NavigationCommand, NavigationLog, TimestampedCommand};
pub use request::PendingNavigation;
pub use script::{parse_script, ScriptAction, ScriptError, ScriptStep};
pub use state::{Focus, NavigationState};
pub use store::{NavigationSnapshot, NavigationStore, SnapshotReceiver};
pub use transition::{TransitionDriver, TransitionHost, TransitionTiming, ViewTransition};
