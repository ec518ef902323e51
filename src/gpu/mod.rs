//! GPU-facing pieces, built over glow.
//!
//! Shading-language detection, shader program compilation/linking, and mesh
//! buffer management. The host shell owns the GL context and must have it
//! current on the calling thread for everything in here.

/// GPU mesh buffers: upload, draw, teardown.
pub mod mesh;
/// Shading-language detection, source assembly, and program linking.
pub mod shader;

/// Log any pending GL error. Compiled out of release builds.
#[cfg(debug_assertions)]
pub(crate) fn check_error(gl: &glow::Context, context: &str) {
    use glow::HasContext;

    let error = unsafe { gl.get_error() };
    if error != glow::NO_ERROR {
        log::error!("GL error 0x{error:04x} after {context}");
    }
}

#[cfg(not(debug_assertions))]
pub(crate) fn check_error(_gl: &glow::Context, _context: &str) {}
