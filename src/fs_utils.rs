//! Filesystem helpers for writing generated output.

use crate::output::write_lines;
use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write lines to a file, creating parent directories if needed
///
/// The lines go to a temporary file next to `path` which is then renamed
/// over it, so a failed write leaves any existing file untouched.
pub fn write_lines_to_file<P: AsRef<Path>>(path: P, lines: &[String]) -> io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    write_lines(BufWriter::new(staged.as_file_mut()), lines)?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated/tags/blocks.txt");

        write_lines_to_file(&path, &["key A".to_string(), String::new()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "key A\n\n");
        assert_eq!(entries(&dir.path().join("generated/tags")), vec!["blocks.txt"]);
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocks.txt");
        fs::write(&path, "old contents that are longer than the new ones\n").unwrap();

        write_lines_to_file(&path, &["key A".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "key A\n");
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by the staged file.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        assert!(write_lines_to_file(&path, &["key A".to_string()]).is_err());

        assert!(path.is_dir());
        assert_eq!(entries(dir.path()), vec!["taken"]);
    }
}
