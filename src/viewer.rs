//! The viewer: owned state and the host-facing lifecycle entry points.
//!
//! A platform shell drives one [`Viewer`] per view: construct it once the
//! GL context is current, call [`Viewer::resize`] when the surface changes,
//! call [`Viewer::draw`] once per display frame with that frame's input
//! snapshot, and let it drop (or call [`Viewer::free`] explicitly) at
//! shutdown. All state lives in the struct - there are no process-wide
//! globals, so input application and drawing are single-threaded by
//! construction.

use glam::{Mat4, Vec2};
use glow::HasContext;

use crate::camera::controller::CameraController;
use crate::camera::input::FrameInput;
use crate::error::MeshviewError;
use crate::gpu::mesh::GpuMesh;
use crate::gpu::shader::{ShaderProgram, ShadingVersion};
use crate::mesh::{CpuMesh, Transform};
use crate::options::Options;
use crate::platform::PlatformApi;
use crate::scene::{Scene, SceneMesh, ShaderId};

/// Owned state of one running view.
pub struct Viewer {
    gl: glow::Context,
    platform: Box<dyn PlatformApi>,
    options: Options,
    scene: Scene,
    controller: CameraController,
    screen: Vec2,
    object_shader: ShaderId,
}

impl Viewer {
    /// Initialize a view against a current GL context.
    ///
    /// Detects the shading-language dialect, sets fixed GL state, compiles
    /// the object shader, loads the configured OBJ mesh, and starts the
    /// intro fade. Every error out of here is fatal: an unsupported
    /// shading language, a missing or uncompilable shader, an unusable
    /// mesh, or a full scene table.
    pub fn new(
        gl: glow::Context,
        platform: Box<dyn PlatformApi>,
        options: Options,
    ) -> Result<Self, MeshviewError> {
        let gl_version = unsafe { gl.get_parameter_string(glow::VERSION) };
        log::info!("GL version: {gl_version}");

        let version_string =
            unsafe { gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION) };
        log::info!("GL shading language version: {version_string}");
        let shading_version = ShadingVersion::detect(&version_string)?;

        unsafe {
            gl.enable(glow::CULL_FACE);
            gl.enable(glow::BLEND);
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
            gl.blend_equation_separate(glow::FUNC_ADD, glow::FUNC_ADD);
            gl.blend_func_separate(
                glow::ONE,
                glow::ONE_MINUS_SRC_ALPHA,
                glow::ONE,
                glow::ONE_MINUS_SRC_ALPHA,
            );
        }

        let mut scene = Scene::new();
        let program = ShaderProgram::load(
            &gl,
            platform.as_ref(),
            shading_version,
            &options.assets.vertex_shader,
            &options.assets.fragment_shader,
        )?;
        let object_shader = scene.add_shader(program)?;

        // One-time uniforms; the light position is re-pointed every frame.
        unsafe { gl.use_program(Some(program.program)) };
        set_vec3(&gl, &program, "objectColor", options.display.object_color);
        set_vec3(&gl, &program, "lightColor", options.display.light_color);
        set_vec3(&gl, &program, "lightPos", options.display.light_position);
        crate::gpu::check_error(&gl, "one-time uniform upload");

        let mesh_name = &options.assets.mesh;
        let bytes = platform.open_resource_file(mesh_name).ok_or_else(|| {
            MeshviewError::ResourceMissing(mesh_name.clone())
        })?;
        let cpu = CpuMesh::from_obj_bytes(&bytes)?;
        log::info!(
            "loaded {mesh_name}: {} vertices, {} indices",
            cpu.vertices.len(),
            cpu.indices.len()
        );
        let gpu = GpuMesh::upload(&gl, &cpu)?;
        scene.add_mesh(SceneMesh {
            cpu,
            gpu,
            transform: Transform::default(),
            shader: object_shader,
        })?;

        let mut controller = CameraController::new(options.camera.clone());
        controller.begin_intro_fade();
        scene.set_ready(true);

        Ok(Self {
            gl,
            platform,
            options,
            scene,
            controller,
            screen: Vec2::ONE,
            object_shader,
        })
    }

    /// Record the surface dimensions and update the GL viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = Vec2::new(width as f32, height as f32);
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };
    }

    /// Advance the camera state machine and render one frame.
    pub fn draw(&mut self, input: &FrameInput) {
        let [r, g, b, a] = self.options.display.clear_color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        if !self.scene.is_ready() {
            return;
        }

        self.controller.update(input);
        let camera = &self.controller.camera;
        let view = camera.view_matrix();
        let projection =
            camera.projection_matrix(self.screen.x, self.screen.y);

        // Every program sees the same view/projection pair.
        for shader in self.scene.shaders() {
            unsafe { self.gl.use_program(Some(shader.program)) };
            set_mat4(&self.gl, shader, "view", &view);
            set_mat4(&self.gl, shader, "projection", &projection);
        }
        crate::gpu::check_error(&self.gl, "view/projection upload");

        for mesh in self.scene.meshes() {
            let shader = self.scene.shader(mesh.shader);
            unsafe { self.gl.use_program(Some(shader.program)) };
            set_mat4(&self.gl, shader, "model", &mesh.transform.model_matrix());
            set_mat4(
                &self.gl,
                shader,
                "rotate",
                &mesh.transform.rotation_matrix(),
            );
            mesh.gpu.draw(&self.gl, shader.topology);
        }
        crate::gpu::check_error(&self.gl, "mesh draw");

        // The light follows the camera so the facing side is always lit.
        let object = self.scene.shader(self.object_shader);
        unsafe { self.gl.use_program(Some(object.program)) };
        set_vec3(&self.gl, object, "lightPos", camera.position().to_array());
        crate::gpu::check_error(&self.gl, "light update");
    }

    /// Tear down GPU objects and clear the scene.
    ///
    /// Idempotent; also runs on drop, so explicit calls are only needed
    /// when the shell must release GL resources before the context dies.
    pub fn free(&mut self) {
        if !self.scene.is_ready() {
            return;
        }
        for mesh in self.scene.meshes() {
            mesh.gpu.destroy(&self.gl);
        }
        for shader in self.scene.shaders() {
            shader.destroy(&self.gl);
        }
        self.scene.clear();
    }

    /// The camera controller, e.g. for shells that want to observe the
    /// gesture phase or the current pose.
    #[must_use]
    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    /// The options this view was constructed with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The platform capability this view reads resources through.
    #[must_use]
    pub fn platform(&self) -> &dyn PlatformApi {
        self.platform.as_ref()
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.free();
    }
}

fn set_vec3(
    gl: &glow::Context,
    shader: &ShaderProgram,
    name: &str,
    value: [f32; 3],
) {
    unsafe {
        let location = gl.get_uniform_location(shader.program, name);
        gl.uniform_3_f32(location.as_ref(), value[0], value[1], value[2]);
    }
}

fn set_mat4(
    gl: &glow::Context,
    shader: &ShaderProgram,
    name: &str,
    value: &Mat4,
) {
    unsafe {
        let location = gl.get_uniform_location(shader.program, name);
        gl.uniform_matrix_4_f32_slice(
            location.as_ref(),
            false,
            &value.to_cols_array(),
        );
    }
}
