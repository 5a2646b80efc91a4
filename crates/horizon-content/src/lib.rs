//! Content Tree Types
//!
//! Read-only data contracts for the universe → galaxy → solar system →
//! planet → moon hierarchy explored by The Horizon.
//!
//! ## Design Principles
//!
//! 1. **Opaque string ids** - every entity is keyed by an [`EntityId`]; the
//!    navigation core stores ids only, never entity references
//! 2. **No egui dependency** - pure data, usable headless
//! 3. **Lookups return `Option`** - an unresolvable id is the caller's "not
//!    found" case, never an error

mod error;
mod id;
mod tree;

pub use error::{ContentError, ContentResult};
pub use id::EntityId;
pub use tree::{ContentPath, ContentTree, Galaxy, Moon, Planet, SolarSystem, Universe};
