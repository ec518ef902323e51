use serde::{Deserialize, Serialize};

/// Camera motion tunables.
///
/// Angles are degrees. The fixed pitch/zoom limits are part of the
/// interaction contract and live as constants in [`crate::camera::core`];
/// they are deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Orbit radius (distance from the focal point).
    pub radius: f32,
    /// Drag-to-rotation sensitivity multiplier.
    pub rotate_sensitivity: f32,
    /// Per-frame momentum decay factor while coasting.
    pub deceleration: f32,
    /// Offset magnitude below which coasting snaps to a stop.
    pub stop_threshold: f32,
    /// Per-frame progress step for the intro/reset animations.
    pub animation_step: f32,
    /// Yaw distance swept by the intro fade, in degrees.
    pub intro_yaw_sweep: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            radius: 2.2,
            rotate_sensitivity: 0.3,
            deceleration: 0.97,
            stop_threshold: 0.05,
            animation_step: 0.007,
            intro_yaw_sweep: 300.0,
        }
    }
}
