//! Pack a directory into a zip archive.

use crate::error::{Error, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create a zip archive at `dest` holding the contents of `src`.
///
/// Entry names are relative to `src`, so unpacking the archive reproduces the
/// tree without an extra wrapping directory. Subdirectories become directory
/// entries, files become deflate-compressed file entries.
///
/// Errors if `src` does not exist or is not a directory. Any failure midway
/// aborts the whole operation; `dest` may be left partially written.
pub fn zip_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    if !src.exists() {
        return Err(Error::NoSuchPath(src.into()));
    }
    if !src.is_dir() {
        return Err(Error::NotADirectory(src.into()));
    }

    let wrap = |source| Error::ArchiveAccess {
        path: dest.into(),
        source,
    };

    let mut zip = ZipWriter::new(File::create(dest)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let name = entry
            .path()
            .strip_prefix(src)
            .expect("walked outside of source dir");

        if entry.file_type().is_file() {
            zip.start_file(name.to_string_lossy(), options).map_err(wrap)?;
            io::copy(&mut File::open(entry.path())?, &mut zip)?;
        } else if entry.file_type().is_dir() && !name.as_os_str().is_empty() {
            zip.add_directory(name.to_string_lossy(), options)
                .map_err(wrap)?;
        }
    }

    zip.finish().map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn zip_and_read_back() -> Result<()> {
        let tmp = tempdir()?;
        let src = tmp.path().join("tree");
        fs::create_dir_all(src.join("sub"))?;
        fs::write(src.join("a.txt"), "alpha")?;
        fs::write(src.join("sub/b.txt"), "beta")?;

        let dest = tmp.path().join("tree.zip");
        zip_dir(&src, &dest)?;
        assert!(dest.is_file());

        let mut archive = zip::ZipArchive::new(File::open(&dest)?)
            .map_err(|source| Error::ArchiveAccess {
                path: dest.clone(),
                source,
            })?;
        let names: HashSet<String> = archive.file_names().map(String::from).collect();
        assert!(names.contains("a.txt"));
        assert!(names.contains("sub/b.txt"));

        let mut body = String::new();
        io::Read::read_to_string(&mut archive.by_name("sub/b.txt").unwrap(), &mut body)?;
        assert_eq!(body, "beta");
        Ok(())
    }

    #[test]
    fn zip_missing_source() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("never-created");
        let dest = tmp.path().join("out.zip");
        assert!(matches!(
            zip_dir(&gone, &dest),
            Err(Error::NoSuchPath(p)) if p == gone
        ));
    }

    #[test]
    fn zip_source_is_a_file() -> Result<()> {
        let tmp = tempdir()?;
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a dir")?;
        assert!(matches!(
            zip_dir(&file, tmp.path().join("out.zip")),
            Err(Error::NotADirectory(p)) if p == file
        ));
        Ok(())
    }
}
