use std::collections::BTreeMap;

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::{NoteIndex, NoteMetadata, TargetFile};

use super::{Vault, VaultError, linkpath, parse_metadata};

/// A vault whose notes live in memory.
///
/// ```rust
/// # use inline_notes_engine::vault::{MemoryVault, Vault};
/// # use relative_path::RelativePath;
/// let vault = MemoryVault::new().with_note("A.md", "---\ntitle: Alpha\n---\nHello");
/// let a = vault.find_destination("A", RelativePath::new("B.md")).unwrap();
/// assert_eq!(vault.metadata(&a).unwrap().title.as_deref(), Some("Alpha"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryVault {
    index: NoteIndex,
    contents: BTreeMap<RelativePathBuf, String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a markdown note; its metadata comes from its frontmatter.
    pub fn with_note(mut self, path: &str, content: &str) -> Self {
        let path = RelativePathBuf::from(path);
        self.index.add_note(path.clone(), parse_metadata(content));
        self.contents.insert(path, content.to_string());
        self
    }

    /// Adds a file the index does not cover, like an attachment.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let path = RelativePathBuf::from(path);
        self.index.add_file(path.clone());
        self.contents.insert(path, content.to_string());
        self
    }

    /// Adds an indexed note whose content cannot be read.
    pub fn with_unreadable_note(mut self, path: &str, metadata: NoteMetadata) -> Self {
        self.index.add_note(RelativePathBuf::from(path), metadata);
        self
    }

    pub fn index(&self) -> &NoteIndex {
        &self.index
    }
}

impl Vault for MemoryVault {
    fn find_destination(&self, key: &str, source: &RelativePath) -> Option<TargetFile> {
        linkpath::find_destination(&self.index, key, source).cloned()
    }

    fn metadata(&self, target: &TargetFile) -> Option<NoteMetadata> {
        self.index
            .get(target.relative_path())
            .and_then(|e| e.metadata.clone())
    }

    fn read(&self, target: &TargetFile) -> Result<String, VaultError> {
        self.contents
            .get(target.relative_path())
            .cloned()
            .ok_or_else(|| VaultError::Missing(target.relative_path().to_relative_path_buf()))
    }
}
