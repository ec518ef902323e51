use glow::HasContext;

use crate::error::MeshviewError;
use crate::mesh::{CpuMesh, Vertex};

/// GPU-resident mesh: vertex array, vertex buffer, element buffer.
///
/// Handles are plain GL names; [`Self::destroy`] must run before the
/// context goes away. The owning [`crate::viewer::Viewer`] does that in its
/// teardown path.
#[derive(Debug, Clone, Copy)]
pub struct GpuMesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    ebo: glow::NativeBuffer,
    index_count: i32,
}

impl GpuMesh {
    /// Upload `mesh` into freshly created GL buffers.
    pub fn upload(
        gl: &glow::Context,
        mesh: &CpuMesh,
    ) -> Result<Self, MeshviewError> {
        let stride = std::mem::size_of::<Vertex>() as i32;
        let normal_offset = std::mem::offset_of!(Vertex, normal) as i32;

        unsafe {
            let vao =
                gl.create_vertex_array().map_err(MeshviewError::GlObject)?;
            let vbo = gl.create_buffer().map_err(MeshviewError::GlObject)?;
            let ebo = gl.create_buffer().map_err(MeshviewError::GlObject)?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&mesh.vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&mesh.indices),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                stride,
                0,
            );
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                normal_offset,
            );

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: mesh.indices.len() as i32,
            })
        }
    }

    /// Issue the indexed draw call. The shader program must already be
    /// bound.
    pub fn draw(&self, gl: &glow::Context, topology: u32) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(
                topology,
                self.index_count,
                glow::UNSIGNED_SHORT,
                0,
            );
            gl.bind_vertex_array(None);
        }
    }

    /// Delete the GL objects. The mesh must not be drawn afterwards.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.ebo);
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}
