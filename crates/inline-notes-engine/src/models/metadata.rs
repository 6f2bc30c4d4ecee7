/// What the vault knows about an indexed note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    /// The frontmatter `title`, if set.
    pub title: Option<String>,
}

impl NoteMetadata {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}
