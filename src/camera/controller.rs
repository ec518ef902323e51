use glam::Vec2;

use crate::camera::core::{
    OrbitCamera, ORTHO_SCALE_MAX, PITCH_DEFAULT, PITCH_MAX, PITCH_MIN,
    YAW_BASE,
};
use crate::camera::input::FrameInput;
use crate::options::CameraOptions;
use crate::util::easing::EasingCurve;

/// Curve shared by the intro fade and the reset animation.
const ANIM_CURVE: EasingCurve = EasingCurve::CubicOut;

/// The gesture phase resolved for one frame.
///
/// Exactly one phase runs per frame. Variants are listed in priority order
/// and the first match wins; this ordering determines the interaction feel
/// (e.g. a pinch preempts a held pointer) and is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// One-shot eased camera animation played at startup.
    IntroFade,
    /// Double-tap recognized: set up the reset animation.
    DoubleTapReset,
    /// Pinch gesture started or ended this frame.
    PinchTransition,
    /// Pinch gesture continuing.
    PinchActive,
    /// Pointer held down: direct drag.
    Dragging,
    /// Eased return to the canonical pose after a double-tap.
    ResetAnimating,
    /// No active gesture: residual momentum decay.
    Idle,
}

/// Owns the orbit camera and advances it from per-frame input.
///
/// Internal pointer state (last position, drag offset with decay), the two
/// animation flags, and the animation progress scalar live here; the
/// camera itself only holds pose and animation targets.
#[derive(Debug)]
pub struct CameraController {
    /// The camera driven by this controller.
    pub camera: OrbitCamera,
    opts: CameraOptions,

    last: Vec2,
    offset: Vec2,

    intro_fading: bool,
    resetting_camera: bool,
    anim_t: f32,
}

impl CameraController {
    /// Create a controller at the resting pose. The intro fade does not
    /// start until [`Self::begin_intro_fade`] is called.
    #[must_use]
    pub fn new(opts: CameraOptions) -> Self {
        let mut camera = OrbitCamera::new(opts.radius);
        camera.yaw_anim_amount = opts.intro_yaw_sweep;
        Self {
            camera,
            opts,
            last: Vec2::new(400.0, 300.0),
            offset: Vec2::ZERO,
            intro_fading: false,
            resetting_camera: false,
            anim_t: 0.0,
        }
    }

    /// Start the one-shot intro fade from the configured yaw sweep.
    pub fn begin_intro_fade(&mut self) {
        self.intro_fading = true;
        self.anim_t = 0.0;
    }

    /// Whether the intro fade is still running.
    #[must_use]
    pub fn is_intro_fading(&self) -> bool {
        self.intro_fading
    }

    /// Whether the double-tap reset animation is still running.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        self.resetting_camera
    }

    /// Residual drag offset (momentum) in degrees per frame.
    #[must_use]
    pub fn drag_offset(&self) -> Vec2 {
        self.offset
    }

    /// Progress of the running animation, in `[0, 1)`.
    #[must_use]
    pub fn anim_progress(&self) -> f32 {
        self.anim_t
    }

    /// Resolve which phase handles this frame. First match wins.
    #[must_use]
    pub fn resolve_phase(&self, input: &FrameInput) -> GesturePhase {
        if self.intro_fading {
            GesturePhase::IntroFade
        } else if input.double_tap {
            GesturePhase::DoubleTapReset
        } else if input.pinch_transition {
            GesturePhase::PinchTransition
        } else if input.pinch_active {
            GesturePhase::PinchActive
        } else if input.pointer_down {
            GesturePhase::Dragging
        } else if self.resetting_camera {
            GesturePhase::ResetAnimating
        } else {
            GesturePhase::Idle
        }
    }

    /// Advance the camera by one frame of input.
    pub fn update(&mut self, input: &FrameInput) {
        match self.resolve_phase(input) {
            GesturePhase::IntroFade => self.tick_intro_fade(input),
            GesturePhase::DoubleTapReset => self.start_camera_reset(input),
            GesturePhase::PinchTransition => {
                self.apply_pinch_transition(input);
            }
            GesturePhase::PinchActive => self.apply_pinch_zoom(input),
            GesturePhase::Dragging => self.apply_drag(input),
            GesturePhase::ResetAnimating => self.tick_camera_reset(),
            GesturePhase::Idle => self.coast(),
        }
        self.camera.update_position();
    }

    fn tick_intro_fade(&mut self, input: &FrameInput) {
        self.anim_t += self.opts.animation_step;
        let curve = ANIM_CURVE.evaluate(self.anim_t);
        self.camera.yaw = self.camera.yaw_anim_end
            + self.camera.yaw_anim_amount * (1.0 - curve);
        self.camera.set_pitch(
            self.camera.pitch_anim_end
                + self.camera.pitch_anim_amount * (1.0 - curve),
        );
        if self.anim_t >= 1.0 {
            // Re-anchor a held pointer so the drag phase taking over next
            // frame does not see a jump.
            if input.pointer_down {
                self.last = Vec2::new(input.pointer_x, input.pointer_y);
            }
            self.intro_fading = false;
            self.anim_t = 0.0;
        }
    }

    fn start_camera_reset(&mut self, input: &FrameInput) {
        self.last = Vec2::new(input.pointer_x, input.pointer_y);
        self.offset = Vec2::ZERO;

        self.intro_fading = false;
        self.resetting_camera = true;
        self.anim_t = 0.0;

        let camera = &mut self.camera;

        // Shortest rotational path back to the canonical yaw: wrap the
        // current yaw to within half a turn of base + 180 and keep the
        // remainder as the eased delta. |delta| never exceeds 180.
        let zeroed = camera.yaw - (YAW_BASE + 180.0);
        let whole = (zeroed / 360.0).trunc() * 360.0;
        let mut fraction = zeroed - whole;
        if fraction < 0.0 {
            fraction += 360.0;
        }
        camera.yaw_anim_end = whole + YAW_BASE;
        camera.yaw_anim_amount = fraction - 180.0;

        camera.pitch_anim_end = PITCH_DEFAULT;
        camera.pitch_anim_amount = camera.pitch() - PITCH_DEFAULT;

        camera.ortho_scale_diff = ORTHO_SCALE_MAX - camera.ortho_scale();
    }

    fn apply_pinch_transition(&mut self, input: &FrameInput) {
        if input.pinch_active {
            // Pinch just started: it preempts any running animation and
            // kills residual momentum.
            self.intro_fading = false;
            self.resetting_camera = false;
            self.offset = Vec2::ZERO;
        } else {
            // Pinch just ended: apply the final ratio once.
            self.apply_pinch_zoom(input);
        }
    }

    fn apply_pinch_zoom(&mut self, input: &FrameInput) {
        // The recognizer reports cumulative finger spread; zoom scale moves
        // inversely (spreading fingers shrinks the ortho volume).
        let scale = self.camera.ortho_scale() * (1.0 / input.pinch_scale);
        self.camera.set_ortho_scale(scale);
    }

    fn apply_drag(&mut self, input: &FrameInput) {
        if input.pointer_transition {
            self.last = Vec2::new(input.pointer_x, input.pointer_y);
            self.intro_fading = false;
            self.resetting_camera = false;
        }

        // Y is inverted: screen coordinates grow downward, pitch grows
        // upward.
        self.offset.x = input.pointer_x - self.last.x;
        self.offset.y = self.last.y - input.pointer_y;
        self.last = Vec2::new(input.pointer_x, input.pointer_y);
        self.offset *= self.opts.rotate_sensitivity;

        self.apply_offset_to_angles();
    }

    fn tick_camera_reset(&mut self) {
        self.anim_t += self.opts.animation_step;
        let curve = ANIM_CURVE.evaluate(self.anim_t);
        let camera = &mut self.camera;
        camera.yaw =
            camera.yaw_anim_end + camera.yaw_anim_amount * (1.0 - curve);
        camera.set_pitch(
            camera.pitch_anim_end + camera.pitch_anim_amount * (1.0 - curve),
        );
        camera.set_ortho_scale(
            ORTHO_SCALE_MAX - camera.ortho_scale_diff * (1.0 - curve),
        );
        if self.anim_t >= 1.0 {
            self.resetting_camera = false;
            self.anim_t = 0.0;
        }
    }

    fn coast(&mut self) {
        self.apply_offset_to_angles();
        self.offset *= self.opts.deceleration;
        if self.offset.x.abs() < self.opts.stop_threshold {
            self.offset.x = 0.0;
        }
        if self.offset.y.abs() < self.opts.stop_threshold {
            self.offset.y = 0.0;
        }
    }

    /// Shared by drag and coast: feed the offset into yaw/pitch. Momentum
    /// into a pitch stop is discarded so release does not fight the clamp.
    fn apply_offset_to_angles(&mut self) {
        self.camera.yaw += self.offset.x;
        let target = self.camera.pitch() + self.offset.y;
        self.camera.set_pitch(target);
        if target < PITCH_MIN || target > PITCH_MAX {
            self.offset.y = 0.0;
        }
    }
}
