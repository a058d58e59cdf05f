//! Error type shared by every routine in the crate.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Three families of failure: preconditions the caller violated, a resource
/// container that exists but can't be read, and plain I/O errors from copying
/// bytes around. Callers can match on the variant to tell "nothing there"
/// apart from "something there but unreadable".
#[derive(Debug, Error)]
pub enum Error {
    #[error("path does not exist: {}", .0.display())]
    NoSuchPath(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    #[error("cannot read archive: {}", .path.display())]
    ArchiveAccess {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
