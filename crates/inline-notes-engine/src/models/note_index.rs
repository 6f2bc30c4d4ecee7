use std::collections::BTreeMap;

use relative_path::{RelativePath, RelativePathBuf};

use super::{NoteMetadata, TargetFile};

/// A discovered file plus its metadata. Only markdown notes carry metadata;
/// other files are locatable but unindexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub file: TargetFile,
    pub metadata: Option<NoteMetadata>,
}

/// In-memory index of every file in a vault.
///
/// Uses BTreeMap for automatic sorted ordering by path.
#[derive(Debug, Default, Clone)]
pub struct NoteIndex {
    files: BTreeMap<RelativePathBuf, IndexEntry>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a markdown note with its metadata
    pub fn add_note(&mut self, relative_path: RelativePathBuf, metadata: NoteMetadata) {
        self.insert(relative_path, Some(metadata));
    }

    /// Add a file that can be linked to but has no metadata
    pub fn add_file(&mut self, relative_path: RelativePathBuf) {
        self.insert(relative_path, None);
    }

    fn insert(&mut self, relative_path: RelativePathBuf, metadata: Option<NoteMetadata>) {
        self.files.insert(
            relative_path.clone(),
            IndexEntry {
                file: TargetFile::new(relative_path),
                metadata,
            },
        );
    }

    pub fn get(&self, relative_path: &RelativePath) -> Option<&IndexEntry> {
        self.files.get(relative_path)
    }

    /// Get all entries, sorted by path
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.files.values()
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
