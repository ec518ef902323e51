//! CPU-side mesh data: OBJ loading, vertex layout, and model transforms.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::error::MeshviewError;

/// One GPU vertex: position + normal, tightly packed.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal (zero when the OBJ carries none).
    pub normal: [f32; 3],
}

/// A triangle mesh flattened for upload.
///
/// Loading keeps one vertex per face-corner with an identity-order index
/// list; corners shared between faces are not deduplicated. That wastes
/// buffer space but keeps the loader a single pass over the parsed faces.
#[derive(Debug, Clone, Default)]
pub struct CpuMesh {
    /// Flattened vertices, one per face-corner.
    pub vertices: Vec<Vertex>,
    /// Identity-order indices (`0..vertices.len()`).
    pub indices: Vec<u16>,
}

impl CpuMesh {
    /// Parse an OBJ document and flatten it.
    ///
    /// Faces are triangulated by the parser; texture coordinates are parsed
    /// but not kept. Fails when the document cannot be parsed, contains no
    /// geometry, or has more face-corners than a 16-bit index can address.
    pub fn from_obj_bytes(bytes: &[u8]) -> Result<Self, MeshviewError> {
        let options = tobj::LoadOptions {
            triangulate: true,
            ..tobj::LoadOptions::default()
        };
        let mut reader = bytes;
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &options, |_| {
                Ok((Vec::new(), Default::default()))
            })
            .map_err(|e| MeshviewError::MeshParse(e.to_string()))?;

        let corner_count: usize =
            models.iter().map(|m| m.mesh.indices.len()).sum();
        if corner_count == 0 {
            return Err(MeshviewError::MeshParse(
                "document contains no faces".to_owned(),
            ));
        }
        if u16::try_from(corner_count).is_err() {
            return Err(MeshviewError::MeshParse(format!(
                "{corner_count} face-corners exceed the 16-bit index range"
            )));
        }

        let mut vertices = Vec::with_capacity(corner_count);
        for model in &models {
            let mesh = &model.mesh;
            for (corner, &v_idx) in mesh.indices.iter().enumerate() {
                let p = 3 * v_idx as usize;
                let mut vertex = Vertex {
                    position: [
                        mesh.positions[p],
                        mesh.positions[p + 1],
                        mesh.positions[p + 2],
                    ],
                    normal: [0.0; 3],
                };
                if let Some(&n_idx) = mesh.normal_indices.get(corner) {
                    let n = 3 * n_idx as usize;
                    vertex.normal = [
                        mesh.normals[n],
                        mesh.normals[n + 1],
                        mesh.normals[n + 2],
                    ];
                }
                vertices.push(vertex);
            }
        }

        let indices = (0..vertices.len() as u16).collect();
        log::debug!(
            "flattened OBJ document into {} face-corner vertices",
            vertices.len()
        );
        Ok(Self { vertices, indices })
    }
}

/// Model transform decomposed into scale/rotate/translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Per-axis scale.
    pub scale: Vec3,
    /// Rotation.
    pub rotation: Quat,
    /// Translation.
    pub translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Combined model matrix, translate * rotate * scale.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }

    /// Rotation-only matrix, used to transform normals in the shader.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";

    #[test]
    fn triangle_flattens_to_one_vertex_per_corner(
    ) -> Result<(), MeshviewError> {
        let mesh = CpuMesh::from_obj_bytes(TRIANGLE.as_bytes())?;
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
        Ok(())
    }

    #[test]
    fn quad_is_triangulated_without_deduplication(
    ) -> Result<(), MeshviewError> {
        let obj = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
        let mesh = CpuMesh::from_obj_bytes(obj.as_bytes())?;
        // Two triangles, six corners, no corner sharing.
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn missing_normals_are_zeroed() -> Result<(), MeshviewError> {
        let obj = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";
        let mesh = CpuMesh::from_obj_bytes(obj.as_bytes())?;
        assert_eq!(mesh.vertices[0].normal, [0.0; 3]);
        Ok(())
    }

    #[test]
    fn texture_coordinates_are_parsed_but_dropped(
    ) -> Result<(), MeshviewError> {
        let obj = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
f 1/1 2/2 3/3
";
        let mesh = CpuMesh::from_obj_bytes(obj.as_bytes())?;
        assert_eq!(mesh.vertices.len(), 3);
        Ok(())
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(matches!(
            CpuMesh::from_obj_bytes(b""),
            Err(MeshviewError::MeshParse(_))
        ));
    }

    #[test]
    fn document_without_faces_is_rejected() {
        assert!(matches!(
            CpuMesh::from_obj_bytes(b"v 0.0 0.0 0.0\n"),
            Err(MeshviewError::MeshParse(_))
        ));
    }

    #[test]
    fn model_matrix_composes_translate_rotate_scale() {
        let transform = Transform {
            scale: Vec3::splat(2.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            translation: Vec3::new(1.0, 0.0, 0.0),
        };
        // Scale happens first, then rotation, then translation.
        let p = transform.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-5);
    }
}
