//! Recursive discovery of source files that may carry schema blocks.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::IoError;

/// Options for source discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverOptions {
    /// File extensions to include (e.g., `[".ts"]`); dot and case are ignored
    pub extensions: Vec<String>,
    /// Skip hidden files and directories
    pub skip_hidden: bool,
    /// Skip directories by name (e.g., `["node_modules"]`)
    pub skip_dirs: Vec<String>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".ts".to_string()],
            skip_hidden: false,
            skip_dirs: vec!["node_modules".to_string()],
        }
    }
}

/// Discover source files under `root`, sorted by path.
///
/// # Errors
/// `IoError::NotFound` when `root` is not a directory; `IoError::System`
/// when a directory cannot be read during the walk.
pub fn discover_sources(root: &Path, options: &DiscoverOptions) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::NotFound(root.to_string_lossy().to_string()));
    }

    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !should_skip(entry, options));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && has_extension(entry.path(), &extensions) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "discovered sources");
    Ok(files)
}

fn should_skip(entry: &DirEntry, options: &DiscoverOptions) -> bool {
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    if options.skip_hidden && name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir() && options.skip_dirs.iter().any(|skip| skip == name)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Normalize extension to lowercase with dot prefix.
fn normalize_extension(ext: &str) -> String {
    let mut ext = ext.to_lowercase();
    if !ext.starts_with('.') {
        ext = format!(".{ext}");
    }
    ext
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_discover_recursive_sorted() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        let root = temp.path();
        File::create(root.join("b.ts"))?;
        File::create(root.join("a.ts"))?;
        File::create(root.join("notes.md"))?;
        fs::create_dir_all(root.join("src/nested"))?;
        File::create(root.join("src/nested/deep.TS"))?;

        let files = discover_sources(root, &DiscoverOptions::default()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.ts"),
                PathBuf::from("b.ts"),
                PathBuf::from("src/nested/deep.TS"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_skip_dirs_and_hidden() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        let root = temp.path();
        fs::create_dir_all(root.join("node_modules/pkg"))?;
        File::create(root.join("node_modules/pkg/index.ts"))?;
        fs::create_dir_all(root.join(".cache"))?;
        File::create(root.join(".cache/gen.ts"))?;
        File::create(root.join("main.ts"))?;

        let files = discover_sources(root, &DiscoverOptions::default()).unwrap();
        assert_eq!(files.len(), 2, "got {files:?}");

        let options = DiscoverOptions {
            skip_hidden: true,
            ..Default::default()
        };
        let files = discover_sources(root, &options).unwrap();
        assert_eq!(files, vec![root.join("main.ts")]);
        Ok(())
    }

    #[test]
    fn test_missing_root() {
        let result = discover_sources(Path::new("/nonexistent/ischema"), &DiscoverOptions::default());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("ts"), ".ts");
        assert_eq!(normalize_extension(".ts"), ".ts");
        assert_eq!(normalize_extension("TS"), ".ts");
    }
}
