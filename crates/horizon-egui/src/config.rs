//! HUD configuration.

use serde::{Deserialize, Serialize};

/// Which HUD elements to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Universe > galaxy > ... path with clickable ancestors.
    pub show_breadcrumb: bool,
    /// Spinner while a transition is in flight or requests are queued.
    pub show_busy_indicator: bool,
    /// Number of queued requests next to the spinner.
    pub show_queue_depth: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            show_breadcrumb: true,
            show_busy_indicator: true,
            show_queue_depth: false,
        }
    }
}

impl HudConfig {
    /// Everything on, for debugging rapid-click sequences.
    pub fn verbose() -> Self {
        Self {
            show_queue_depth: true,
            ..Default::default()
        }
    }
}
