//! Horizon egui layer
//!
//! Camera and HUD for the navigation core, in egui's immediate mode style:
//!
//! - **Update phase**: tick the [`TransitionDriver`], retarget and tick the
//!   [`CameraState`], extract [`HudData`] from the latest snapshot
//! - **Render phase**: draw the HUD, apply the returned [`HudAction`]
//!
//! # Example
//!
//! ```ignore
//! fn update(&mut self, ctx: &egui::Context, dt: f32) {
//!     self.driver.tick(&mut self.store, dt);
//!     self.camera.track(self.store.state().focus());
//!     self.camera.tick(dt);
//!
//!     let data = HudData::extract(&self.store.snapshot(), Some(&self.content), &self.hud);
//!     egui::TopBottomPanel::top("hud").show(ctx, |ui| {
//!         if let Some(intent) = hud_bar(ui, &data).intent {
//!             intent.apply(&mut self.store);
//!         }
//!     });
//! }
//! ```
//!
//! [`TransitionDriver`]: horizon_nav::TransitionDriver

pub mod camera;
pub mod config;
pub mod hud;

pub use camera::{CameraPose, CameraState};
pub use config::HudConfig;
pub use hud::{hud_bar, CrumbLabel, HudAction, HudData, NavigationIntent, NOT_FOUND};
