//! Camera system: orbit parameters, per-frame input, and the gesture state
//! machine that animates them.

/// Gesture state machine advancing the camera each frame.
pub mod controller;
/// Orbit camera parameters and matrix builders.
pub mod core;
/// Per-frame input snapshot supplied by the platform shell.
pub mod input;
