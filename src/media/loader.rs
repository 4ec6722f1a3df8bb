/// Asset decoding into renderer handles
///
/// Decoding runs in background tasks so the UI thread never blocks on
/// image work. Each asset the UI references is tracked through a small
/// progressive state machine: a placeholder while loading, the decoded
/// handle on success, a deterministic fallback on any failure.

use std::path::PathBuf;

use iced::widget::image::Handle;
use thiserror::Error;
use tokio::task;

use super::thumbnail;

/// Per-asset loading state as the view sees it.
#[derive(Debug, Clone)]
pub enum ImageState {
    /// Load requested, placeholder showing
    Loading,
    /// Decoded and ready to render
    Ready(Handle),
    /// Missing or undecodable; render the fallback card
    Failed,
}

impl ImageState {
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            ImageState::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Why an asset could not be turned into a handle. Failures are logged
/// and collapse into `ImageState::Failed`; nothing is retried and no
/// dialog is shown.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("asset not found in the assets folder: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("thumbnail cache unavailable: {0}")]
    Cache(String),
    #[error("background task failed: {0}")]
    Background(String),
}

/// Load the grid thumbnail for a content reference.
///
/// `resolved` is the asset index lookup result; an unresolved reference
/// fails immediately without touching the disk. Cache misses decode and
/// resize on a blocking thread. If only the cache is unusable (no cache
/// dir, full disk), the thumbnail is decoded in memory instead so the
/// grid still fills in.
pub async fn load_thumbnail(resolved: Option<PathBuf>, source: String) -> Result<Handle, LoadError> {
    let path = resolved.ok_or_else(|| LoadError::NotFound(source.clone()))?;

    task::spawn_blocking(move || match thumbnail::ensure_thumbnail(&path, &source) {
        Ok(cached) => Ok(Handle::from_path(cached)),
        Err(cache_error @ LoadError::Cache(_)) => {
            eprintln!("⚠️  {}; decoding thumbnail in memory", cache_error);
            decode_in_memory(&path)
        }
        Err(other) => Err(other),
    })
    .await
    .map_err(|e| LoadError::Background(e.to_string()))?
}

/// Load the full-size asset for the lightbox.
pub async fn load_full(resolved: Option<PathBuf>, source: String) -> Result<Handle, LoadError> {
    let path = resolved.ok_or_else(|| LoadError::NotFound(source))?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    task::spawn_blocking(move || {
        // Validate before handing the bytes to the renderer, so a broken
        // file becomes a fallback card instead of a blank widget
        image::load_from_memory(&bytes).map_err(|e| LoadError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Handle::from_bytes(bytes))
    })
    .await
    .map_err(|e| LoadError::Background(e.to_string()))?
}

/// Decode and downscale without touching the cache.
fn decode_in_memory(path: &std::path::Path) -> Result<Handle, LoadError> {
    let decoded = image::open(path).map_err(|e| LoadError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let thumbnail = decoded.thumbnail(thumbnail::THUMBNAIL_SIZE, thumbnail::THUMBNAIL_SIZE);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unresolved_reference_fails_fast() {
        let result = load_full(None, "sports/ghost.jpg".to_string()).await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let result = load_full(
            Some(PathBuf::from("/nonexistent/path.jpg")),
            "sports/event1.jpg".to_string(),
        )
        .await;
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[tokio::test]
    async fn test_undecodable_bytes_are_a_decode_error() {
        let bogus = std::env::temp_dir().join(format!("osuele-junk-{}.jpg", std::process::id()));
        std::fs::write(&bogus, b"junk bytes, not an image").unwrap();

        let result = load_full(Some(bogus.clone()), "test/junk.jpg".to_string()).await;
        assert!(matches!(result, Err(LoadError::Decode { .. })));

        std::fs::remove_file(&bogus).unwrap();
    }

    #[test]
    fn test_failed_state_has_no_handle() {
        assert!(ImageState::Failed.handle().is_none());
        assert!(ImageState::Loading.handle().is_none());
    }
}
