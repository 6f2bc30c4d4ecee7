use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use relative_path::{RelativePath, RelativePathBuf};

use crate::{
    io::{is_markdown, read_file, scan_files, validate_notes_dir},
    models::{NoteIndex, NoteMetadata, TargetFile},
};

use super::{Vault, VaultError, linkpath, parse_metadata};

/// A vault backed by a notes directory.
///
/// The directory is indexed once at [`FsVault::open`]; note contents are
/// read from disk on demand so inlining always sees the latest text.
#[derive(Debug)]
pub struct FsVault {
    root: PathBuf,
    index: NoteIndex,
}

impl FsVault {
    /// Scans `root` and indexes every visible file. Markdown notes get their
    /// frontmatter parsed; everything else is locatable but unindexed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let root = root.into();
        validate_notes_dir(&root)?;

        let mut vault = Self {
            root,
            index: NoteIndex::new(),
        };
        for path in scan_files(&vault.root)? {
            let Some(relative) = vault.relative(&path) else {
                debug!("skipping unrepresentable path {}", path.display());
                continue;
            };
            if is_markdown(&path) {
                vault.index_note(relative);
            } else {
                vault.index.add_file(relative);
            }
        }

        info!(
            "indexed {} files under {}",
            vault.index.len(),
            vault.root.display()
        );
        Ok(vault)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> &NoteIndex {
        &self.index
    }

    /// Re-reads a note's metadata, e.g. after it was rewritten.
    pub fn refresh(&mut self, relative: &RelativePath) {
        self.index_note(relative.to_relative_path_buf());
    }

    fn relative(&self, path: &Path) -> Option<RelativePathBuf> {
        let rel = path.strip_prefix(&self.root).ok()?;
        RelativePathBuf::from_path(rel).ok()
    }

    fn index_note(&mut self, relative: RelativePathBuf) {
        match read_file(&relative, &self.root) {
            Ok(text) => self.index.add_note(relative, parse_metadata(&text)),
            Err(e) => {
                // Still linkable; Obsidian would index it with no frontmatter.
                warn!("could not read {relative} while indexing: {e}");
                self.index.add_note(relative, NoteMetadata::default());
            }
        }
    }
}

impl Vault for FsVault {
    fn find_destination(&self, key: &str, source: &RelativePath) -> Option<TargetFile> {
        linkpath::find_destination(&self.index, key, source).cloned()
    }

    fn metadata(&self, target: &TargetFile) -> Option<NoteMetadata> {
        self.index
            .get(target.relative_path())
            .and_then(|e| e.metadata.clone())
    }

    fn read(&self, target: &TargetFile) -> Result<String, VaultError> {
        Ok(read_file(target.relative_path(), &self.root)?)
    }
}
