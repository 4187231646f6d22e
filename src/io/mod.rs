//! File I/O helpers and report writers.

pub mod output;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/report.json");
        write_file(&path, "{}").unwrap();
        assert_eq!(read_file(&path).unwrap(), "{}");
    }

    #[test]
    fn read_missing_file_names_the_path() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("not/here.txt"));
    }
}
