/// Grid thumbnail generation and disk cache
///
/// Full-size photos are far larger than the grid cells that show them,
/// so each asset gets a 256px thumbnail cached on disk:
/// ~/.cache/osuele-sports/thumbnails on Linux. Cache entries are keyed
/// by the sanitized content reference and regenerated whenever missing.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::loader::LoadError;

/// Size of generated thumbnails (longest edge)
pub const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory, creating it on first use.
pub fn cache_dir() -> Result<PathBuf, LoadError> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or_else(|| LoadError::Cache("could not determine cache directory".into()))?;

    path.push("osuele-sports");
    path.push("thumbnails");

    std::fs::create_dir_all(&path)
        .map_err(|e| LoadError::Cache(format!("creating {}: {}", path.display(), e)))?;

    Ok(path)
}

/// Cache file name for a content reference: path separators collapse
/// into dashes so "sports/event1.jpg" becomes "sports-event1.jpg".
pub fn cache_file_name(source: &str) -> String {
    source.replace(['/', '\\'], "-")
}

/// Expected cache location for a content reference (without generating).
pub fn thumbnail_path(source: &str) -> Result<PathBuf, LoadError> {
    Ok(cache_dir()?.join(cache_file_name(source)))
}

/// Return the cached thumbnail for `source`, generating it from the
/// resolved asset file if it is not cached yet.
pub fn ensure_thumbnail(asset: &Path, source: &str) -> Result<PathBuf, LoadError> {
    let target = thumbnail_path(source)?;

    if target.exists() {
        return Ok(target);
    }

    let decoded = image::open(asset).map_err(|e| LoadError::Decode {
        path: asset.display().to_string(),
        message: e.to_string(),
    })?;

    let thumbnail = decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    thumbnail
        .save(&target)
        .map_err(|e| LoadError::Cache(format!("saving {}: {}", target.display(), e)))?;

    println!("📸 Cached thumbnail: {}", target.display());

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_name_flattens_separators() {
        assert_eq!(cache_file_name("sports/event1.jpg"), "sports-event1.jpg");
        assert_eq!(cache_file_name("sports\\team1.jpg"), "sports-team1.jpg");
        assert_eq!(cache_file_name("logo.png"), "logo.png");
    }

    #[test]
    fn test_distinct_sources_never_collide_on_disk() {
        let names: Vec<String> = crate::content::gallery::GALLERY_IMAGES
            .iter()
            .map(|image| cache_file_name(image.source))
            .collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ensure_thumbnail_rejects_undecodable_file() {
        let bogus = std::env::temp_dir().join(format!("osuele-bogus-{}.jpg", std::process::id()));
        std::fs::write(&bogus, b"this is not an image").unwrap();

        let result = ensure_thumbnail(&bogus, "test/bogus-thumb-input.jpg");
        assert!(matches!(result, Err(LoadError::Decode { .. })));

        std::fs::remove_file(&bogus).unwrap();
    }
}
