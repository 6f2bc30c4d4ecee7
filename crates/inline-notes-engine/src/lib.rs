pub mod editing;
pub mod inlining;
pub mod io;
pub mod models;
pub mod parsing;
pub mod vault;


// Re-export key types for easier usage
pub use editing::{Cmd, NoteDocument, Patch, TextBuffer};
pub use inlining::{
    CursorPos, InlineOptions, Inliner, PassReport, RecordKey, RecursiveReport, SkipReason,
};
pub use io::*;
pub use models::{NoteIndex, NoteMetadata, TargetFile};
pub use parsing::{Link, LinkKind, LinkSpan, Position, extract_links};
pub use vault::{FsVault, MemoryVault, Vault, VaultError};
