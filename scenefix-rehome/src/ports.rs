use camino::{Utf8Path, Utf8PathBuf};

/// Read-only access to the filesystem the bundle's assets live on.
///
/// scenefix-rehome uses this so the repair rules can be tested against an
/// in-memory implementation.
pub trait AssetView {
    fn exists(&self, path: &str) -> bool;

    /// Resolve `path` to an absolute path, if the platform can.
    fn absolute(&self, path: &str) -> Option<Utf8PathBuf>;
}

/// File-system backed `AssetView`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetView;

impl AssetView for FsAssetView {
    fn exists(&self, path: &str) -> bool {
        Utf8Path::new(path).exists()
    }

    fn absolute(&self, path: &str) -> Option<Utf8PathBuf> {
        Utf8Path::new(path).canonicalize_utf8().ok()
    }
}
