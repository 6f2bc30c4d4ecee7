use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
use xi_rope::Rope;

use crate::{
    editing::{Cmd, Patch, TextBuffer, commands::compile_command},
    parsing::{Link, Position, extract_links},
};

/// A note opened for inlining.
///
/// ## Single source of truth
/// - **Lossless storage**: the entire note sits in one `xi_rope::Rope`
/// - **Exact round-trip**: `to_bytes()` returns the original bytes until an
///   edit touches them
///
/// ## Command-based editing
/// - Every change is a [`Cmd`] compiled to a delta and applied at once
/// - `version` increments on each edit
///
/// ```rust
/// # use inline_notes_engine::editing::{NoteDocument, TextBuffer};
/// let doc = NoteDocument::from_bytes("a.md".into(), b"[[B]] and [[C]]").unwrap();
/// assert_eq!(doc.links().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct NoteDocument {
    pub(crate) path: RelativePathBuf,
    pub(crate) buffer: Rope,
    pub(crate) version: u64,
}

impl NoteDocument {
    /// Create a new document from raw bytes
    pub fn from_bytes(path: RelativePathBuf, bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(path, text))
    }

    pub fn from_text(path: RelativePathBuf, text: &str) -> Self {
        Self {
            path,
            buffer: Rope::from(text),
            version: 0,
        }
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command to the buffer and report what changed.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let delta = compile_command(self.buffer.len(), &cmd);

        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                xi_rope::delta::DeltaElement::Copy(from, to) => {
                    cursor += to - from;
                }
                xi_rope::delta::DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    let end = cursor + inserted.len();
                    changed.push(start..end);
                    cursor = end;
                }
            }
        }

        self.buffer = delta.apply(&self.buffer);
        self.version += 1;

        Patch {
            changed,
            version: self.version,
        }
    }
}

impl TextBuffer for NoteDocument {
    fn source_path(&self) -> &RelativePath {
        &self.path
    }

    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn links(&self) -> Vec<Link> {
        extract_links(&self.buffer)
    }

    fn replace_range(&mut self, text: &str, start: Position, end: Position) {
        let patch = self.apply(Cmd::ReplaceRange {
            range: start.offset..end.offset,
            text: text.to_string(),
        });
        debug!(
            "{} v{}: replaced {}..{}, inserted {:?}",
            self.path, patch.version, start.offset, end.offset, patch.changed
        );
    }
}
