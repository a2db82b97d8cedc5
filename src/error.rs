//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the orbis crate.
#[derive(Debug)]
pub enum GalleryError {
    /// The gallery was constructed without a container to render into.
    MissingContainer,
    /// An item's image could not be fetched or decoded.
    AssetLoad {
        /// The asset reference that failed.
        asset: String,
        /// Human-readable failure reason.
        reason: String,
    },
    /// The environment rejected a fullscreen request.
    Fullscreen(String),
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Gallery manifest parsing failure.
    ManifestParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainer => {
                write!(f, "gallery container is missing")
            }
            Self::AssetLoad { asset, reason } => {
                write!(f, "failed to load asset {asset}: {reason}")
            }
            Self::Fullscreen(msg) => {
                write!(f, "fullscreen request rejected: {msg}")
            }
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ManifestParse(msg) => {
                write!(f, "manifest parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GalleryError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn asset_error_names_the_asset() {
        let err = GalleryError::AssetLoad {
            asset: "photos/dune.jpg".into(),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load asset photos/dune.jpg: not found"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_is_chained() {
        let err = GalleryError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(err.source().is_some());
    }
}
