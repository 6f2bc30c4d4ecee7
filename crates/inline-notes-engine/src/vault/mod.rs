//! # Vault
//!
//! The store of notes that links point into. The inliner only talks to the
//! [`Vault`] trait: resolve a link to a file, look up that file's metadata,
//! read its content. [`FsVault`] serves a directory on disk and
//! [`MemoryVault`] serves notes held in memory.

pub mod frontmatter;
pub mod fs;
pub mod linkpath;
pub mod memory;

use relative_path::{RelativePath, RelativePathBuf};

use crate::{
    io::IoError,
    models::{NoteMetadata, TargetFile},
};

pub use frontmatter::parse_metadata;
pub use fs::FsVault;
pub use memory::MemoryVault;

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("No content stored for {0}")]
    Missing(RelativePathBuf),
}

/// Link resolution and content access over a set of notes.
pub trait Vault {
    /// Reduces raw link text to the key used for lookup, dropping any
    /// `#heading` or `#^block` subpath.
    fn resolve_link_path(&self, raw: &str) -> String {
        linkpath::link_path(raw).to_string()
    }

    /// Finds the file a link-path key points at, as seen from `source`.
    fn find_destination(&self, key: &str, source: &RelativePath) -> Option<TargetFile>;

    /// Metadata for indexed notes; `None` for files the index does not cover.
    fn metadata(&self, target: &TargetFile) -> Option<NoteMetadata>;

    fn read(&self, target: &TargetFile) -> Result<String, VaultError>;
}

impl<V: Vault + ?Sized> Vault for &V {
    fn resolve_link_path(&self, raw: &str) -> String {
        (**self).resolve_link_path(raw)
    }

    fn find_destination(&self, key: &str, source: &RelativePath) -> Option<TargetFile> {
        (**self).find_destination(key, source)
    }

    fn metadata(&self, target: &TargetFile) -> Option<NoteMetadata> {
        (**self).metadata(target)
    }

    fn read(&self, target: &TargetFile) -> Result<String, VaultError> {
        (**self).read(target)
    }
}
