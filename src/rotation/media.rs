//! Media resolution for rotating items.
//!
//! A terminal cannot show the portrait itself, so resolving a media
//! reference means confirming the image decodes and reading its size for
//! the caption. Failure is never fatal: the caller keeps rendering text.

use std::path::{Path, PathBuf};

use super::item::MediaRef;

/// Outcome of resolving a media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    Available { label: String, width: u32, height: u32 },
    Unavailable { label: String, reason: String },
}

impl MediaStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Short caption for the renderer.
    pub fn caption(&self) -> String {
        match self {
            Self::Available {
                label,
                width,
                height,
            } => format!("{label} ({width}×{height})"),
            Self::Unavailable { label, .. } => format!("{label} (unavailable)"),
        }
    }
}

/// Resolves media references to something displayable.
pub trait MediaResolver: Send + Sync {
    fn resolve(&self, media: &MediaRef) -> MediaStatus;
}

/// Resolves media paths relative to a root directory on disk.
#[derive(Debug, Clone)]
pub struct FsMediaResolver {
    root: PathBuf,
}

impl FsMediaResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, media: &MediaRef) -> PathBuf {
        if media.path().is_absolute() {
            media.path().to_path_buf()
        } else {
            self.root.join(media.path())
        }
    }
}

impl MediaResolver for FsMediaResolver {
    fn resolve(&self, media: &MediaRef) -> MediaStatus {
        let path = self.full_path(media);
        match image::image_dimensions(&path) {
            Ok((width, height)) => MediaStatus::Available {
                label: media.label(),
                width,
                height,
            },
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "Media unavailable");
                MediaStatus::Unavailable {
                    label: media.label(),
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unavailable() {
        let resolver = FsMediaResolver::new("/nonexistent-folio-media");
        let status = resolver.resolve(&MediaRef::new("portrait.jpg"));
        assert!(!status.is_available());
        assert_eq!(status.caption(), "portrait.jpg (unavailable)");
    }

    #[test]
    fn corrupt_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let resolver = FsMediaResolver::new(dir.path());
        let status = resolver.resolve(&MediaRef::new("broken.png"));
        assert!(matches!(status, MediaStatus::Unavailable { .. }));
    }

    #[test]
    fn decodable_image_reports_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbImage::new(3, 2).save(&path).unwrap();

        let resolver = FsMediaResolver::new(dir.path());
        let status = resolver.resolve(&MediaRef::new("tiny.png"));
        assert_eq!(
            status,
            MediaStatus::Available {
                label: "tiny.png".to_string(),
                width: 3,
                height: 2,
            }
        );
        assert_eq!(status.caption(), "tiny.png (3×2)");
    }
}
