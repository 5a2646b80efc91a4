//! Camera state and animation.
//!
//! The camera flies between destination poses. Each focus maps to a fixed
//! pose: zoom grows with depth and the center drifts toward the focused
//! entity's slot. The lerp runs independently of the [`TransitionDriver`];
//! the driver owns timing and completion, the camera only follows.
//!
//! [`TransitionDriver`]: horizon_nav::TransitionDriver

use egui::{Pos2, Vec2};
use horizon_nav::{EntityId, Focus, FocusLevel};

/// Zoom multiplier per level of depth.
const ZOOM_STEP: f32 = 4.0;

/// Extra zoom when a moon is focused on top of its planet.
const MOON_ZOOM: f32 = 2.0;

/// Radius of the ring entities are placed on at the universe scale.
const UNIVERSE_RADIUS: f32 = 400.0;

/// Where the camera should be to show a focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub center: Vec2,
    pub zoom: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl CameraPose {
    /// Pose for a focus, built only from its level-gated ids.
    pub fn for_focus(focus: &Focus) -> Self {
        let mut pose = CameraPose::default();
        let mut radius = UNIVERSE_RADIUS;

        let chain = [
            (FocusLevel::Galaxy, focus.galaxy()),
            (FocusLevel::SolarSystem, focus.solar_system()),
            (FocusLevel::Planet, focus.planet()),
        ];
        for (level, id) in chain {
            if !focus.level.reaches(level) {
                break;
            }
            if let Some(id) = id {
                pose.center += slot_offset(id, radius);
            }
            pose.zoom *= ZOOM_STEP;
            radius /= ZOOM_STEP;
        }

        if let Some(moon) = focus.moon() {
            pose.center += slot_offset(moon, radius);
            pose.zoom *= MOON_ZOOM;
        }
        pose
    }
}

/// Stable position on a ring for an id.
fn slot_offset(id: &EntityId, radius: f32) -> Vec2 {
    // FNV-1a, so layouts do not move between runs
    let hash = id
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
    let angle = (hash % 3600) as f32 / 3600.0 * std::f32::consts::TAU;
    Vec2::angled(angle) * radius
}

/// Camera state for the navigation view.
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Current camera center in world coordinates.
    pub center: Vec2,
    /// Current zoom level (1.0 = universe scale).
    pub zoom: f32,
    /// Pose being animated toward.
    pub target: CameraPose,
    /// Viewport size in screen pixels.
    pub viewport_size: Vec2,
    /// Animation speed (0-1, where 1 = instant).
    pub lerp_speed: f32,
    /// Whether the camera is currently animating.
    pub is_animating: bool,
    /// Focus the target pose was derived from.
    tracked: Focus,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
            target: CameraPose::default(),
            viewport_size: Vec2::new(800.0, 600.0),
            lerp_speed: 0.15,
            is_animating: false,
            tracked: Focus::default(),
        }
    }
}

impl CameraState {
    /// Set the viewport size (call when window resizes).
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            center: self.center,
            zoom: self.zoom,
        }
    }

    pub fn animate_to(&mut self, pose: CameraPose) {
        self.target = pose;
        self.is_animating = true;
    }

    /// Instantly snap camera to a pose (no animation).
    pub fn snap_to(&mut self, pose: CameraPose) {
        self.center = pose.center;
        self.zoom = pose.zoom;
        self.target = pose;
        self.is_animating = false;
    }

    /// Retarget toward `focus` if it differs from the focus last tracked.
    ///
    /// Returns whether a new animation started.
    pub fn track(&mut self, focus: &Focus) -> bool {
        if &self.tracked == focus {
            return false;
        }
        self.tracked = focus.clone();
        let pose = CameraPose::for_focus(focus);
        tracing::trace!(level = %focus.level, zoom = pose.zoom, "camera retargeted");
        self.animate_to(pose);
        true
    }

    /// Update camera animation (call each frame).
    pub fn tick(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        let t = 1.0 - (1.0 - self.lerp_speed).powf(dt * 60.0);
        self.center = self.center + (self.target.center - self.center) * t;
        // Zoom spans orders of magnitude, so interpolate in log space
        self.zoom = (self.zoom.ln() + (self.target.zoom.ln() - self.zoom.ln()) * t).exp();

        let center_dist = (self.center - self.target.center).length();
        let zoom_ratio = (self.zoom / self.target.zoom - 1.0).abs();
        if center_dist < 0.01 && zoom_ratio < 0.001 {
            self.snap_to(self.target);
        }
    }

    /// Convert world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world: Vec2) -> Pos2 {
        let screen_center = (self.viewport_size / 2.0).to_pos2();
        screen_center + (world - self.center) * self.zoom
    }

    /// Convert screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen: Pos2) -> Vec2 {
        let screen_center = (self.viewport_size / 2.0).to_pos2();
        self.center + (screen - screen_center) / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_focus() -> Focus {
        Focus {
            level: FocusLevel::Planet,
            galaxy_id: Some("milky-way".into()),
            solar_system_id: Some("sol".into()),
            planet_id: Some("earth".into()),
            moon_id: None,
        }
    }

    #[test]
    fn universe_pose_is_origin() {
        assert_eq!(CameraPose::for_focus(&Focus::default()), CameraPose::default());
    }

    #[test]
    fn zoom_grows_with_depth() {
        let planet = CameraPose::for_focus(&planet_focus());
        assert_eq!(planet.zoom, ZOOM_STEP.powi(3));

        let mut moon = planet_focus();
        moon.moon_id = Some("luna".into());
        assert_eq!(CameraPose::for_focus(&moon).zoom, planet.zoom * MOON_ZOOM);
    }

    #[test]
    fn retained_ids_do_not_move_shallow_pose() {
        let mut focus = planet_focus();
        focus.level = FocusLevel::Galaxy;

        let galaxy_only = Focus {
            level: FocusLevel::Galaxy,
            galaxy_id: Some("milky-way".into()),
            ..Default::default()
        };
        assert_eq!(
            CameraPose::for_focus(&focus),
            CameraPose::for_focus(&galaxy_only)
        );
    }

    #[test]
    fn pose_is_stable_per_id() {
        let a = CameraPose::for_focus(&planet_focus());
        let b = CameraPose::for_focus(&planet_focus());
        assert_eq!(a, b);
    }

    #[test]
    fn track_animates_until_target() {
        let mut cam = CameraState::default();
        assert!(cam.track(&planet_focus()));
        assert!(!cam.track(&planet_focus()));
        assert!(cam.is_animating);

        for _ in 0..600 {
            cam.tick(1.0 / 60.0);
        }
        assert!(!cam.is_animating);
        assert_eq!(cam.pose(), CameraPose::for_focus(&planet_focus()));
    }

    #[test]
    fn snap_stops_animation() {
        let mut cam = CameraState::default();
        cam.track(&planet_focus());
        cam.snap_to(CameraPose::default());
        assert!(!cam.is_animating);
        assert_eq!(cam.zoom, 1.0);
    }

    #[test]
    fn screen_world_round_trip_at_center() {
        let cam = CameraState::default();
        let center = cam.world_to_screen(Vec2::ZERO);
        assert_eq!(center, Pos2::new(400.0, 300.0));
        assert_eq!(cam.screen_to_world(center), Vec2::ZERO);
    }
}
