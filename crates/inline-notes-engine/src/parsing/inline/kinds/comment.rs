/// Comments hide everything inside them, links included. Unlike code spans
/// they may run across paragraphs, so they are tracked during extraction
/// rather than by the inline parser.
pub struct Comment;

impl Comment {
    /// Obsidian comment, `%% hidden %%`.
    pub const OBSIDIAN: &'static str = "%%";
    pub const HTML_OPEN: &'static str = "<!--";
    pub const HTML_CLOSE: &'static str = "-->";

    /// Opening delimiters paired with what closes them.
    pub const PAIRS: [(&'static str, &'static str); 2] = [
        (Self::OBSIDIAN, Self::OBSIDIAN),
        (Self::HTML_OPEN, Self::HTML_CLOSE),
    ];
}
