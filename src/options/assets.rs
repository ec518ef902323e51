use serde::{Deserialize, Serialize};

/// Resource names resolved through [`crate::platform::PlatformApi`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetOptions {
    /// OBJ mesh resource loaded into the scene at startup.
    pub mesh: String,
    /// Vertex shader source for the object shader.
    pub vertex_shader: String,
    /// Fragment shader source for the object shader.
    pub fragment_shader: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            mesh: "bunny_vn.obj".to_owned(),
            vertex_shader: "shaders/object_vert.glsl".to_owned(),
            fragment_shader: "shaders/object_frag.glsl".to_owned(),
        }
    }
}
