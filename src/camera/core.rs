use glam::{Mat4, Vec3};

/// Lowest allowed pitch angle, in degrees.
pub const PITCH_MIN: f32 = 15.0;
/// Highest allowed pitch angle, in degrees.
pub const PITCH_MAX: f32 = 88.0;
/// Resting pitch angle, in degrees.
pub const PITCH_DEFAULT: f32 = 48.0;
/// Initial yaw angle, in degrees.
pub const YAW_DEFAULT: f32 = 0.0;
/// Canonical yaw the camera rests at and returns to, in degrees.
pub const YAW_BASE: f32 = 44.0;

/// Smallest orthographic zoom scale (fully zoomed in).
pub const ORTHO_SCALE_MIN: f32 = 0.4;
/// Largest orthographic zoom scale (fully zoomed out).
pub const ORTHO_SCALE_MAX: f32 = 0.75;
/// Orthographic zoom scale at startup.
pub const ORTHO_SCALE_DEFAULT: f32 = 0.7;

/// Near clipping plane distance.
pub const NEAR_PLANE: f32 = 0.5;
/// Far clipping plane distance.
pub const FAR_PLANE: f32 = 5.0;

/// Fixed world-space focal point the camera orbits and looks at.
pub const LOOK_AT_CENTER: Vec3 = Vec3::new(0.0, 0.45, 0.0);
/// World-space up direction.
pub const LOOK_AT_UP: Vec3 = Vec3::Y;

/// Orbit camera parameterized by yaw/pitch/radius around
/// [`LOOK_AT_CENTER`], with an orthographic zoom scale.
///
/// Pitch and zoom scale are private and clamped in their setters, so the
/// [`PITCH_MIN`]..=[`PITCH_MAX`] and [`ORTHO_SCALE_MIN`]..=[`ORTHO_SCALE_MAX`]
/// invariants hold on every mutation path, animations included. Yaw is
/// unbounded; the reset animation's shortest-path computation handles full
/// turns.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Orbit radius (distance from the focal point).
    pub radius: f32,
    /// Yaw angle in degrees.
    pub yaw: f32,
    pitch: f32,
    ortho_scale: f32,
    position: Vec3,

    /// Yaw value an eased transition lands on.
    pub yaw_anim_end: f32,
    /// Yaw distance covered by an eased transition.
    pub yaw_anim_amount: f32,
    /// Pitch value an eased transition lands on.
    pub pitch_anim_end: f32,
    /// Pitch distance covered by an eased transition.
    pub pitch_anim_amount: f32,
    /// Zoom delta covered by the reset animation.
    pub ortho_scale_diff: f32,
}

impl OrbitCamera {
    /// Create a camera at the resting pose with the given orbit radius.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        let mut camera = Self {
            radius,
            yaw: YAW_DEFAULT,
            pitch: PITCH_DEFAULT,
            ortho_scale: ORTHO_SCALE_DEFAULT,
            position: Vec3::ZERO,
            yaw_anim_end: YAW_BASE,
            yaw_anim_amount: 0.0,
            pitch_anim_end: PITCH_DEFAULT,
            pitch_anim_amount: PITCH_DEFAULT,
            ortho_scale_diff: 0.0,
        };
        camera.update_position();
        camera
    }

    /// Current pitch in degrees, within [`PITCH_MIN`]..=[`PITCH_MAX`].
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch, clamping to [`PITCH_MIN`]..=[`PITCH_MAX`].
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Current zoom scale, within [`ORTHO_SCALE_MIN`]..=[`ORTHO_SCALE_MAX`].
    #[must_use]
    pub fn ortho_scale(&self) -> f32 {
        self.ortho_scale
    }

    /// Set the zoom scale, clamping to
    /// [`ORTHO_SCALE_MIN`]..=[`ORTHO_SCALE_MAX`].
    pub fn set_ortho_scale(&mut self, scale: f32) {
        self.ortho_scale = scale.clamp(ORTHO_SCALE_MIN, ORTHO_SCALE_MAX);
    }

    /// World-space position derived by the last [`Self::update_position`].
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Re-derive the world-space position from (yaw, pitch, radius) via
    /// spherical-to-Cartesian conversion.
    pub fn update_position(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let dir = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.position = dir.normalize() * self.radius;
    }

    /// Right-handed look-at view matrix toward [`LOOK_AT_CENTER`].
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, LOOK_AT_CENTER, LOOK_AT_UP)
    }

    /// Orthographic projection sized by the zoom scale and viewport.
    ///
    /// Half-width is the zoom scale; half-height is scaled by the
    /// viewport's height/width ratio so the mesh keeps its proportions.
    #[must_use]
    pub fn projection_matrix(&self, width: f32, height: f32) -> Mat4 {
        let ratio = height / width;
        let s = self.ortho_scale;
        Mat4::orthographic_rh_gl(
            -s,
            s,
            -ratio * s,
            ratio * s,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_setter_clamps_both_ends() {
        let mut camera = OrbitCamera::new(2.2);
        camera.set_pitch(200.0);
        assert_eq!(camera.pitch(), PITCH_MAX);
        camera.set_pitch(-50.0);
        assert_eq!(camera.pitch(), PITCH_MIN);
        camera.set_pitch(40.0);
        assert_eq!(camera.pitch(), 40.0);
    }

    #[test]
    fn ortho_scale_setter_clamps_both_ends() {
        let mut camera = OrbitCamera::new(2.2);
        camera.set_ortho_scale(10.0);
        assert_eq!(camera.ortho_scale(), ORTHO_SCALE_MAX);
        camera.set_ortho_scale(0.0);
        assert_eq!(camera.ortho_scale(), ORTHO_SCALE_MIN);
    }

    #[test]
    fn position_sits_on_the_orbit_sphere() {
        let mut camera = OrbitCamera::new(2.2);
        camera.yaw = 90.0;
        camera.set_pitch(30.0);
        camera.update_position();
        let position = camera.position();
        assert!(
            (position.length() - 2.2).abs() < 1e-5,
            "position must lie at radius distance, got {}",
            position.length()
        );
        // Pitch lifts the camera above the horizontal plane.
        assert!((position.y - 2.2 * 30.0_f32.to_radians().sin()).abs() < 1e-5);
    }

    #[test]
    fn default_pose_matches_resting_constants() {
        let camera = OrbitCamera::new(2.2);
        assert_eq!(camera.pitch(), PITCH_DEFAULT);
        assert_eq!(camera.yaw, YAW_DEFAULT);
        assert_eq!(camera.ortho_scale(), ORTHO_SCALE_DEFAULT);
    }
}
