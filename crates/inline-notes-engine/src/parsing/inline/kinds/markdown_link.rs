/// Markdown link `[text](destination)` and image-style embed `![text](dest)`.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    /// Destinations with spaces may be wrapped in angle brackets.
    pub const ANGLE_OPEN: u8 = b'<';
    pub const ANGLE_CLOSE: u8 = b'>';
    pub const EMBED: u8 = b'!';
}

/// Backslash escapes a following ASCII punctuation character.
pub const ESCAPE: u8 = b'\\';
