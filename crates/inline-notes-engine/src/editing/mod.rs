/*!
 * # Editing Core
 *
 * The document being inlined lives in a single **`xi_rope::Rope`** buffer.
 *
 * ## Principles
 *
 * ### 1. Single source of truth
 * - The whole note is one rope; saving writes the rope bytes verbatim
 * - Markdown is never regenerated from a model, so untouched text keeps its
 *   exact bytes
 *
 * ### 2. Command-based editing
 * - Every edit is a **`Cmd`** compiled to an xi-rope **`Delta`** and applied
 *   immediately; the next read sees the new text
 * - `apply` returns a **`Patch`** describing the changed ranges
 *
 * ### 3. No cached structure
 * - Links are re-extracted from the current rope on every request, so spans
 *   handed out earlier are never trusted after an edit
 *
 * ## Module Structure
 *
 * - **`buffer`**: `TextBuffer`, the editing seam the inliner works against
 * - **`document`**: `NoteDocument`, the rope-backed buffer
 * - **`commands`**: `Cmd` and its delta compilation
 * - **`patch`**: edit result metadata
 *
 * ## Usage Pattern
 *
 * ```rust
 * use inline_notes_engine::editing::{Cmd, NoteDocument, TextBuffer};
 *
 * let mut doc = NoteDocument::from_bytes("daily.md".into(), b"see [[A]]").unwrap();
 * let patch = doc.apply(Cmd::ReplaceRange { range: 4..9, text: "A's text".into() });
 * assert_eq!(doc.text(), "see A's text");
 * assert_eq!(patch.version, 1);
 * ```
 */

pub mod buffer;
pub mod commands;
pub mod document;
pub mod patch;

pub use buffer::TextBuffer;
pub use commands::Cmd;
pub use document::NoteDocument;
pub use patch::Patch;
