use serde::{Deserialize, Serialize};

/// Fixed scene colors and the initial light placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Frame clear color (RGBA).
    pub clear_color: [f32; 4],
    /// Mesh albedo passed to the object shader.
    pub object_color: [f32; 3],
    /// Light color passed to the object shader.
    pub light_color: [f32; 3],
    /// Light position before the first frame re-points it at the camera.
    pub light_position: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
            object_color: [
                255.0 / 255.99,
                174.0 / 255.99,
                82.0 / 255.99,
            ],
            light_color: [1.0, 1.0, 1.0],
            light_position: [0.2, 0.0, 0.3],
        }
    }
}
