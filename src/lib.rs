// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint group
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::str_to_string)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Platform-independent core of a small cross-platform 3D mesh viewer.
//!
//! The crate loads a single OBJ mesh, compiles a fixed shader set against
//! the driver's reported shading-language dialect, and advances a
//! hand-authored animated orbit camera from per-frame touch/mouse/pinch
//! input. Platform shells (Android JNI glue, iOS/macOS view controllers)
//! own the window, the GL context, and input collection; they talk to this
//! crate through two seams:
//!
//! - [`platform::PlatformApi`] - the capability the shell supplies: open a
//!   named resource and return its bytes.
//! - [`viewer::Viewer`] - the lifecycle the shell drives: construct once
//!   the GL context is current, then `resize`/`draw`/`free`.
//!
//! # Architecture
//!
//! Everything between those seams is single-threaded and callback-driven:
//! the shell calls [`viewer::Viewer::draw`] once per display frame with a
//! [`camera::input::FrameInput`] snapshot, the
//! [`camera::controller::CameraController`] resolves exactly one gesture
//! phase for the frame, and the draw loop re-derives the matrices and
//! issues the indexed draw calls. There is no scene graph, no culling, and
//! no background work.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod mesh;
pub mod options;
pub mod platform;
pub mod scene;
pub mod util;
pub mod viewer;
