use crate::error::{Error, Result};
use sha1::{Digest as UpstreamDigest, Sha1};
use std::path::Path;

const DIGEST_LENGTH: usize = 160 / 8;

/// A SHA-1 digest, rendered as 40 lowercase hex characters.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LENGTH],
}

impl Digest {
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Hash the full contents of a regular file. The whole file is read into
    /// memory first; there is no streaming mode.
    ///
    /// Errors if `path` does not exist or is not a regular file.
    pub fn of_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NoSuchPath(path.into()));
        }
        if !path.is_file() {
            return Err(Error::NotAFile(path.into()));
        }
        Ok(std::fs::read(path)?.into())
    }
}

impl<T> From<T> for Digest
where
    T: AsRef<[u8]>,
{
    fn from(item: T) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(item);
        let bytes: [u8; DIGEST_LENGTH] = hasher.finalize().as_slice().try_into().unwrap();
        Self { bytes }
    }
}
