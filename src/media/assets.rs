/// Asset folder index
///
/// Content entries reference images by a path relative to the assets
/// root (e.g. "sports/event1.jpg"). On startup the root is walked once
/// and every image file is indexed; lookups after that are pure map
/// reads. A reference that is not in the index resolves to None and the
/// caller shows the fallback card.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extensions treated as displayable images.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Immutable index of the assets root, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    entries: HashMap<String, PathBuf>,
}

impl AssetIndex {
    /// Walk `root` and index every image file by its root-relative
    /// path. A missing root yields an empty index; every lookup will
    /// then fail soft into the fallback card.
    pub fn scan(root: &Path) -> Self {
        let mut entries = HashMap::new();

        if !root.is_dir() {
            eprintln!(
                "⚠️  Assets folder {} not found; images will show as unavailable",
                root.display()
            );
            return Self { entries };
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(extension) = path.extension() else {
                continue;
            };
            let ext = extension.to_string_lossy().to_lowercase();
            if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let key = relative.to_string_lossy().replace('\\', "/");
            entries.insert(key, path.to_path_buf());
        }

        println!("🖼️  Indexed {} assets under {}", entries.len(), root.display());

        Self { entries }
    }

    /// Resolve a content reference to the file it names.
    pub fn resolve(&self, source: &str) -> Option<PathBuf> {
        self.entries.get(source).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The assets root: `OSUELE_ASSETS` if set, else ./assets.
pub fn default_root() -> PathBuf {
    std::env::var_os("OSUELE_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("osuele-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("sports")).unwrap();
        dir
    }

    #[test]
    fn test_missing_root_yields_empty_index() {
        let index = AssetIndex::scan(Path::new("/definitely/not/a/real/assets/root"));
        assert!(index.is_empty());
        assert!(index.resolve("sports/event1.jpg").is_none());
    }

    #[test]
    fn test_scan_indexes_by_relative_path() {
        let root = scratch_dir("scan");
        std::fs::write(root.join("sports/event1.jpg"), b"not really a jpeg").unwrap();
        std::fs::write(root.join("sports/notes.txt"), b"skipped").unwrap();

        let index = AssetIndex::scan(&root);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.resolve("sports/event1.jpg"),
            Some(root.join("sports/event1.jpg"))
        );
        assert!(index.resolve("sports/notes.txt").is_none());
        assert!(index.resolve("sports/missing.jpg").is_none());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let root = scratch_dir("case");
        std::fs::write(root.join("sports/TEAM1.JPG"), b"bytes").unwrap();

        let index = AssetIndex::scan(&root);
        assert_eq!(index.len(), 1);
        assert!(index.resolve("sports/TEAM1.JPG").is_some());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
