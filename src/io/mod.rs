pub mod output;

pub use output::{create_writer, DocgenReport, JsonWriter, OutputWriter};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Expand glob patterns relative to a project root into a sorted,
/// deduplicated list of root-relative paths.
pub fn expand_globs(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let full = root.join(pattern);
        let full = full.to_string_lossy().into_owned();
        for entry in glob::glob(&full).with_context(|| format!("invalid glob {pattern}"))? {
            let path = entry.with_context(|| format!("failed to read glob entry for {pattern}"))?;
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            files.push(relative);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_globs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::write(dir.path().join("src/components/Button.tsx"), "").unwrap();
        fs::write(dir.path().join("src/components/Badge.tsx"), "").unwrap();
        fs::write(dir.path().join("src/components/notes.md"), "").unwrap();

        let files =
            expand_globs(dir.path(), &["src/**/*.tsx".to_string()]).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("src/components/Badge.tsx"),
                PathBuf::from("src/components/Button.tsx"),
            ]
        );
    }

    #[test]
    fn test_expand_globs_dedups_overlapping_patterns() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Button.tsx"), "").unwrap();
        let files = expand_globs(
            dir.path(),
            &["*.tsx".to_string(), "Button.tsx".to_string()],
        )
        .unwrap();
        assert_eq!(files, vec![PathBuf::from("Button.tsx")]);
    }
}
