//! Scene state: the shader and mesh tables plus the ready gate.

use crate::error::MeshviewError;
use crate::gpu::mesh::GpuMesh;
use crate::gpu::shader::ShaderProgram;
use crate::mesh::{CpuMesh, Transform};

/// Maximum number of shader programs a scene may hold.
pub const MAX_SHADERS: usize = 16;
/// Maximum number of meshes a scene may hold.
pub const MAX_MESHES: usize = 64;

/// Index of a shader program in the scene's shader table.
///
/// Only handed out by [`Scene::add_shader`], so an id is always in bounds
/// for the scene that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderId(pub(crate) usize);

/// One renderable entry: CPU data, GPU buffers, transform, and shader.
#[derive(Debug)]
pub struct SceneMesh {
    /// CPU-side vertex/index data, kept alive for the mesh's lifetime.
    pub cpu: CpuMesh,
    /// GPU buffer handles.
    pub gpu: GpuMesh,
    /// Model transform.
    pub transform: Transform,
    /// Shader this mesh is drawn with.
    pub shader: ShaderId,
}

/// Shader and mesh tables with fixed capacity limits and a ready gate.
///
/// Exceeding a table limit is a fatal initialization error; there is no
/// eviction. The `ready` flag gates all per-frame work in the draw loop.
#[derive(Debug, Default)]
pub struct Scene {
    shaders: Vec<ShaderProgram>,
    meshes: Vec<SceneMesh>,
    ready: bool,
}

impl Scene {
    /// Create an empty, not-ready scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a linked program to the shader table.
    pub fn add_shader(
        &mut self,
        shader: ShaderProgram,
    ) -> Result<ShaderId, MeshviewError> {
        check_capacity(self.shaders.len(), MAX_SHADERS, "shader")?;
        self.shaders.push(shader);
        Ok(ShaderId(self.shaders.len() - 1))
    }

    /// Add a renderable mesh to the mesh table.
    pub fn add_mesh(&mut self, mesh: SceneMesh) -> Result<(), MeshviewError> {
        check_capacity(self.meshes.len(), MAX_MESHES, "mesh")?;
        self.meshes.push(mesh);
        Ok(())
    }

    /// The shader behind an id issued by this scene.
    #[must_use]
    pub fn shader(&self, id: ShaderId) -> &ShaderProgram {
        &self.shaders[id.0]
    }

    /// All shader programs, in insertion order.
    #[must_use]
    pub fn shaders(&self) -> &[ShaderProgram] {
        &self.shaders
    }

    /// All meshes, in insertion order.
    #[must_use]
    pub fn meshes(&self) -> &[SceneMesh] {
        &self.meshes
    }

    /// Whether per-frame work may run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Gate or ungate per-frame work.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Drop all entries and clear the ready flag.
    ///
    /// GPU objects referenced by the tables must be deleted by the caller
    /// first; this only releases the CPU side.
    pub fn clear(&mut self) {
        self.shaders.clear();
        self.meshes.clear();
        self.ready = false;
    }
}

fn check_capacity(
    len: usize,
    limit: usize,
    table: &'static str,
) -> Result<(), MeshviewError> {
    if len >= limit {
        return Err(MeshviewError::SceneCapacity { table, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_check_admits_below_limit() {
        assert!(check_capacity(0, MAX_SHADERS, "shader").is_ok());
        assert!(check_capacity(MAX_MESHES - 1, MAX_MESHES, "mesh").is_ok());
    }

    #[test]
    fn capacity_check_rejects_at_limit() {
        let result = check_capacity(MAX_MESHES, MAX_MESHES, "mesh");
        assert!(matches!(
            result,
            Err(MeshviewError::SceneCapacity {
                table: "mesh",
                limit: MAX_MESHES,
            })
        ));
    }

    #[test]
    fn new_scene_is_empty_and_not_ready() {
        let scene = Scene::new();
        assert!(scene.shaders().is_empty());
        assert!(scene.meshes().is_empty());
        assert!(!scene.is_ready());
    }
}
