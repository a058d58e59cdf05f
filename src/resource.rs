//! Discovery and extraction of bundled resource files.
//!
//! A program's read-only assets live in one of two places depending on how it
//! was deployed: loose under a directory (typical during development), or
//! packed inside a zip container shipped alongside the binary. [`Resources`]
//! names the backing mode once, at construction; every lookup then goes
//! through the same resolution and callers never branch on storage themselves.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::result::ZipError;
use zip::ZipArchive;

/// Where bundled resources are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Resources {
    /// Loose files under a base directory.
    Dir(PathBuf),
    /// Entries inside a zip container.
    Archive(PathBuf),
}

impl Resources {
    /// Every regular file under the logical root, as a set of paths.
    ///
    /// The two modes anchor their results differently, and consumers depend
    /// on it: `Dir` mode emits `root` joined with each file's path relative
    /// to the resolved directory, while `Archive` mode emits raw entry names,
    /// which already carry the full logical path. Directories are never
    /// emitted in either mode.
    ///
    /// A root that doesn't resolve to anything is `ResourceNotFound`. An
    /// archive that resolves but can't be opened or read is `ArchiveAccess`.
    /// Either way, no partial set is returned.
    pub fn file_paths(&self, root: impl AsRef<Path>) -> Result<HashSet<PathBuf>> {
        let root = root.as_ref();
        match self {
            Self::Dir(base) => {
                let resolved = base.join(root);
                if !resolved.is_dir() {
                    return Err(Error::ResourceNotFound(root.into()));
                }

                let mut paths = HashSet::new();
                for entry in WalkDir::new(&resolved) {
                    let entry = entry.map_err(io::Error::from)?;
                    if entry.file_type().is_file() {
                        let rel = entry
                            .path()
                            .strip_prefix(&resolved)
                            .expect("walked outside of resolved root");
                        paths.insert(root.join(rel));
                    }
                }
                Ok(paths)
            }
            Self::Archive(container) => {
                let archive = open_container(container)?;
                let prefix = root.to_string_lossy();

                let mut matched = false;
                let mut paths = HashSet::new();
                for name in archive.file_names() {
                    if !name.starts_with(prefix.as_ref()) {
                        continue;
                    }
                    matched = true;
                    if !name.ends_with('/') {
                        paths.insert(PathBuf::from(name));
                    }
                }

                if !matched {
                    return Err(Error::ResourceNotFound(root.into()));
                }
                Ok(paths)
            }
        }
    }

    /// Copy a single resource's bytes to `out`, creating any missing parent
    /// directories and overwriting whatever is already there.
    pub fn save(&self, resource: impl AsRef<Path>, out: impl AsRef<Path>) -> Result<()> {
        let (resource, out) = (resource.as_ref(), out.as_ref());
        match self {
            Self::Dir(base) => {
                let resolved = base.join(resource);
                if !resolved.is_file() {
                    return Err(Error::ResourceNotFound(resource.into()));
                }
                make_parent(out)?;
                fs::copy(&resolved, out)?;
                Ok(())
            }
            Self::Archive(container) => {
                let mut archive = open_container(container)?;
                let mut entry = match archive.by_name(&resource.to_string_lossy()) {
                    Ok(entry) => entry,
                    Err(ZipError::FileNotFound) => {
                        return Err(Error::ResourceNotFound(resource.into()));
                    }
                    Err(source) => {
                        return Err(Error::ArchiveAccess {
                            path: container.clone(),
                            source,
                        });
                    }
                };
                make_parent(out)?;
                io::copy(&mut entry, &mut File::create(out)?)?;
                Ok(())
            }
        }
    }

    /// Save every resource under `root` into `out_dir`, reproducing the
    /// relative structure that [`Resources::file_paths`] reports. The root
    /// prefix itself is stripped: `root/sub/file` lands at `out_dir/sub/file`.
    pub fn save_all(&self, root: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<()> {
        let (root, out_dir) = (root.as_ref(), out_dir.as_ref());
        for path in self.file_paths(root)? {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            self.save(&path, out_dir.join(rel))?;
        }
        Ok(())
    }
}

fn open_container(path: &Path) -> Result<ZipArchive<File>> {
    let wrap = |source| Error::ArchiveAccess {
        path: path.into(),
        source,
    };
    let file = File::open(path).map_err(|e| wrap(ZipError::Io(e)))?;
    ZipArchive::new(file).map_err(wrap)
}

fn make_parent(out: &Path) -> io::Result<()> {
    match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
