//! Small, stateless helpers for the unglamorous parts of shipping a program
//! with files: answering "is this directory actually empty?", fingerprinting
//! file contents, packing a directory into a zip, and finding or extracting
//! bundled resources whether they sit loose on disk or inside a container
//! archive.
//!
//! Everything here is a plain function or a method on a cheap value type.
//! There is no pipeline, no state machine, no background work; each call is a
//! single synchronous pass over the filesystem or the archive, and releases
//! every handle before returning.
//!
//! ```
//! use respack::Digest;
//!
//! let d = Digest::from("Hello world!");
//! assert_eq!(d.to_hex(), "d3486ae9136e7856bc42212385ea797094475802");
//! ```

pub mod archive;
pub mod digest;
pub mod dir;
pub mod error;
pub mod resource;

pub use archive::zip_dir;
pub use digest::Digest;
pub use dir::is_recursively_empty;
pub use error::{Error, Result};
pub use resource::Resources;
