use glow::HasContext;

use crate::error::MeshviewError;
use crate::platform::PlatformApi;

/// GLSL dialects the viewer can emit a version pragma for.
///
/// Derived from the driver-reported shading-language version string; any
/// other dialect is unsupported and fatal at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingVersion {
    /// OpenGL ES GLSL 3.00.
    Gles300,
    /// OpenGL ES GLSL 3.10.
    Gles310,
    /// OpenGL ES GLSL 3.20.
    Gles320,
    /// Desktop GLSL 4.10.
    Gl410,
}

impl ShadingVersion {
    /// Match the driver-reported `GL_SHADING_LANGUAGE_VERSION` string
    /// against the supported dialects by substring.
    pub fn detect(version_string: &str) -> Result<Self, MeshviewError> {
        if version_string.contains("3.00") {
            Ok(Self::Gles300)
        } else if version_string.contains("3.10") {
            Ok(Self::Gles310)
        } else if version_string.contains("3.20") {
            Ok(Self::Gles320)
        } else if version_string.contains("4.10") {
            Ok(Self::Gl410)
        } else {
            Err(MeshviewError::UnsupportedShadingLanguage(
                version_string.to_owned(),
            ))
        }
    }

    /// The `#version` pragma line prepended to every shader source.
    #[must_use]
    pub const fn pragma(self) -> &'static str {
        match self {
            Self::Gles300 => "#version 300 es\n",
            Self::Gles310 => "#version 310 es\n",
            Self::Gles320 => "#version 320 es\n",
            Self::Gl410 => "#version 410\n",
        }
    }
}

/// Prefix `source` with the dialect's version pragma.
#[must_use]
pub fn compose_source(version: ShadingVersion, source: &str) -> String {
    let pragma = version.pragma();
    let mut composed = String::with_capacity(pragma.len() + source.len());
    composed.push_str(pragma);
    composed.push_str(source);
    composed
}

/// A linked GPU program plus the primitive topology it draws.
#[derive(Debug, Clone, Copy)]
pub struct ShaderProgram {
    /// Linked program handle.
    pub program: glow::NativeProgram,
    /// Primitive topology (`glow::TRIANGLES` for the object shader).
    pub topology: u32,
}

impl ShaderProgram {
    /// Read, compile, and link a vertex/fragment pair resolved through the
    /// platform API.
    ///
    /// Intermediate shader objects are deleted whether or not linking
    /// succeeds. Any failure here is a fatal initialization error.
    pub fn load(
        gl: &glow::Context,
        platform: &dyn PlatformApi,
        version: ShadingVersion,
        vertex_name: &str,
        fragment_name: &str,
    ) -> Result<Self, MeshviewError> {
        let vertex_source =
            compose_source(version, &read_source(platform, vertex_name)?);
        let fragment_source =
            compose_source(version, &read_source(platform, fragment_name)?);

        log::info!("compiling shader: {vertex_name}");
        let vertex =
            compile_stage(gl, glow::VERTEX_SHADER, "vertex", &vertex_source)?;

        log::info!("compiling shader: {fragment_name}");
        let fragment = match compile_stage(
            gl,
            glow::FRAGMENT_SHADER,
            "fragment",
            &fragment_source,
        ) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        log::info!("linking program");
        let linked = link_program(gl, vertex, fragment);

        // The shader objects have served their purpose whether or not the
        // link worked.
        unsafe {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        linked.map(|program| Self {
            program,
            topology: glow::TRIANGLES,
        })
    }

    /// Delete the linked program. The program must not be used afterwards.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn read_source(
    platform: &dyn PlatformApi,
    name: &str,
) -> Result<String, MeshviewError> {
    let bytes = platform
        .open_resource_file(name)
        .ok_or_else(|| MeshviewError::ResourceMissing(name.to_owned()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::NativeShader, MeshviewError> {
    unsafe {
        let shader = gl.create_shader(kind).map_err(MeshviewError::GlObject)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        let info = gl.get_shader_info_log(shader);
        if !info.is_empty() {
            log::warn!("{stage} shader info log: {info}");
        }
        if !gl.get_shader_compile_status(shader) {
            gl.delete_shader(shader);
            return Err(MeshviewError::ShaderCompile { stage, log: info });
        }
        Ok(shader)
    }
}

fn link_program(
    gl: &glow::Context,
    vertex: glow::NativeShader,
    fragment: glow::NativeShader,
) -> Result<glow::NativeProgram, MeshviewError> {
    unsafe {
        let program = gl.create_program().map_err(MeshviewError::GlObject)?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);

        let info = gl.get_program_info_log(program);
        if !info.is_empty() {
            log::warn!("program info log: {info}");
        }
        if !gl.get_program_link_status(program) {
            gl.delete_program(program);
            return Err(MeshviewError::ShaderLink(info));
        }
        Ok(program)
    }
}
