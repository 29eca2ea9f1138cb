use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Reference to an image shown next to a rotating item.
///
/// Only the path is stored; whether it actually resolves is decided at
/// render time by a [`MediaResolver`](crate::rotation::MediaResolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name for display, falling back to the full path.
    pub fn label(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

/// A single unit of rotating content: a quote, a caption, a tagline.
///
/// Fields are private so an item cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    body: String,
    #[serde(default)]
    attribution: Option<String>,
    #[serde(default)]
    media: Option<MediaRef>,
}

impl ContentItem {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attribution: None,
            media: None,
        }
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_media(mut self, media: MediaRef) -> Self {
        self.media = Some(media);
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }
}

/// Item types that can stand in for an empty collection.
pub trait Placeholder {
    fn placeholder() -> Self;
}

impl Placeholder for ContentItem {
    fn placeholder() -> Self {
        ContentItem::new("Nothing to show yet.")
    }
}
