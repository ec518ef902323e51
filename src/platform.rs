//! Host-supplied resource access.
//!
//! Platform shells own asset storage (Android asset manager, iOS/macOS
//! bundles, plain directories on desktop) and expose it to the core through
//! one capability: open a named resource and return its bytes.

use std::path::PathBuf;

/// Capability supplied by the platform shell.
pub trait PlatformApi {
    /// Open a named resource and return its bytes.
    ///
    /// Returns `None` when the resource is missing or unreadable; callers
    /// decide whether that is fatal (shaders, the scene mesh) or not.
    fn open_resource_file(&self, name: &str) -> Option<Vec<u8>>;
}

/// [`PlatformApi`] backed by a directory on the local filesystem.
///
/// Used by desktop shells and tests; mobile shells implement the trait over
/// their own asset managers instead.
#[derive(Debug, Clone)]
pub struct DirectoryPlatform {
    root: PathBuf,
}

impl DirectoryPlatform {
    /// Create a platform rooted at `root`. Resource names resolve relative
    /// to it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PlatformApi for DirectoryPlatform {
    fn open_resource_file(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::warn!("failed to read resource {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_yields_none() {
        let platform = DirectoryPlatform::new(std::env::temp_dir());
        assert!(platform
            .open_resource_file("meshview-does-not-exist.obj")
            .is_none());
    }

    #[test]
    fn existing_resource_yields_bytes() {
        let dir = std::env::temp_dir();
        let name = "meshview-platform-test.txt";
        assert!(std::fs::write(dir.join(name), b"payload").is_ok());

        let platform = DirectoryPlatform::new(&dir);
        assert_eq!(
            platform.open_resource_file(name),
            Some(b"payload".to_vec())
        );

        let _ = std::fs::remove_file(dir.join(name));
    }
}
