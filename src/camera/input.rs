/// Input state for one frame, assembled by the platform shell.
///
/// The shell collapses its event stream (touches, mouse, gesture
/// recognizers) into this snapshot before each
/// [`crate::viewer::Viewer::draw`] call, which keeps input application and
/// drawing on the same thread by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Primary pointer (touch or mouse) is currently down.
    pub pointer_down: bool,
    /// The pointer went down on this frame.
    pub pointer_transition: bool,
    /// Pointer X in screen coordinates.
    pub pointer_x: f32,
    /// Pointer Y in screen coordinates (grows top-to-bottom).
    pub pointer_y: f32,
    /// A double-tap was recognized this frame.
    pub double_tap: bool,
    /// A pinch gesture is in progress.
    pub pinch_active: bool,
    /// The pinch gesture started or ended on this frame.
    pub pinch_transition: bool,
    /// Cumulative scale factor reported by the pinch recognizer.
    pub pinch_scale: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer_down: false,
            pointer_transition: false,
            pointer_x: 0.0,
            pointer_y: 0.0,
            double_tap: false,
            pinch_active: false,
            pinch_transition: false,
            // Identity scale: an idle frame must not zoom.
            pinch_scale: 1.0,
        }
    }
}
