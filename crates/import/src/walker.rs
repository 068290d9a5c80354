// SPDX-License-Identifier: MIT OR Apache-2.0

//! The gitignore-aware file-tree walk (§4.K), using the `ignore` crate
//! rather than bare `std::fs::read_dir` so a resource tree can carry a
//! `.gitignore`/`.ignore` the same way the rest of the ecosystem expects.

use ctxres_core::{CtxError, Result};
use std::path::{Path, PathBuf};

pub struct DiscoveredFile {
    pub absolute_path: PathBuf,
    pub relative_path: PathBuf,
}

/// Walks every regular file under `root`, returning paths relative to it.
pub fn walk(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut out = Vec::new();
    for entry in ignore::WalkBuilder::new(root).build() {
        let entry = entry.map_err(|e| CtxError::Io(e.to_string()))?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if !is_file {
            continue;
        }
        let absolute_path = entry.path().to_path_buf();
        let relative_path =
            absolute_path.strip_prefix(root).unwrap_or(&absolute_path).to_path_buf();
        out.push(DiscoveredFile { absolute_path, relative_path });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walks_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/c.json"), "{}").unwrap();
        let files = walk(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("a/b/c.json"));
    }

    #[test]
    fn respects_gitignore() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "ignored.json\n").unwrap();
        fs::write(dir.path().join("ignored.json"), "{}").unwrap();
        fs::write(dir.path().join("kept.json"), "{}").unwrap();
        let files = walk(dir.path()).unwrap();
        let names: Vec<_> =
            files.iter().map(|f| f.relative_path.to_string_lossy().to_string()).collect();
        assert!(names.contains(&"kept.json".to_string()));
        assert!(!names.contains(&"ignored.json".to_string()));
    }
}
