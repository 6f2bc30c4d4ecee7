pub mod metadata;
pub mod note_index;
pub mod target_file;

pub use metadata::NoteMetadata;
pub use note_index::{IndexEntry, NoteIndex};
pub use target_file::TargetFile;
