//! Recursive emptiness check for directory trees.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Whether `dir` contains no regular files at any depth.
///
/// A directory counts as recursively empty when it has no children at all, or
/// when every child is itself a recursively empty directory. The walk
/// short-circuits on the first regular file it sees. Symlinks and other
/// special node kinds are skipped: they neither count as files nor get
/// recursed into.
///
/// Errors if `dir` does not exist or is not a directory.
pub fn is_recursively_empty(dir: impl AsRef<Path>) -> Result<bool> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(Error::NoSuchPath(dir.into()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.into()));
    }
    Ok(visit(dir))
}

fn visit(dir: &Path) -> bool {
    // A directory we can't list counts as empty. Unusual, but existing
    // callers rely on it; see DESIGN.md before "fixing".
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return true,
    };

    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_file() {
            return false;
        }
        if file_type.is_dir() && !visit(&entry.path()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn empty_dir() -> Result<()> {
        let tmp = tempdir()?;
        assert!(is_recursively_empty(tmp.path())?);
        Ok(())
    }

    #[test]
    fn nested_empty_dirs() -> Result<()> {
        let tmp = tempdir()?;
        fs::create_dir_all(tmp.path().join("a/b/c"))?;
        fs::create_dir_all(tmp.path().join("a/d"))?;
        assert!(is_recursively_empty(tmp.path())?);
        Ok(())
    }

    #[test]
    fn file_at_root() -> Result<()> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("present.txt"))?;
        assert!(!is_recursively_empty(tmp.path())?);
        Ok(())
    }

    #[test]
    fn one_deep_file_among_empty_siblings() -> Result<()> {
        let tmp = tempdir()?;
        fs::create_dir_all(tmp.path().join("empty1/empty2"))?;
        fs::create_dir_all(tmp.path().join("deep/er"))?;
        File::create(tmp.path().join("deep/er/present.txt"))?;
        assert!(!is_recursively_empty(tmp.path())?);
        Ok(())
    }

    #[test]
    fn missing_path_is_an_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("never-created");
        assert!(matches!(
            is_recursively_empty(&gone),
            Err(Error::NoSuchPath(p)) if p == gone
        ));
    }

    #[test]
    fn file_path_is_an_error() -> Result<()> {
        let tmp = tempdir()?;
        let file = tmp.path().join("plain.txt");
        File::create(&file)?;
        assert!(matches!(
            is_recursively_empty(&file),
            Err(Error::NotADirectory(p)) if p == file
        ));
        Ok(())
    }
}
