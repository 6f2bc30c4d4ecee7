use relative_path::RelativePath;

use crate::parsing::{Link, Position};

/// A live, editable note.
///
/// Edits are synchronous: once `replace_range` returns, `text` and `links`
/// reflect the change.
pub trait TextBuffer {
    /// Vault-relative path of the note, used to resolve relative links.
    fn source_path(&self) -> &RelativePath;

    /// The current content.
    fn text(&self) -> String;

    /// Links in the current content, freshly extracted on every call.
    fn links(&self) -> Vec<Link>;

    /// Replaces the text between two positions of the current content.
    fn replace_range(&mut self, text: &str, start: Position, end: Position);
}
