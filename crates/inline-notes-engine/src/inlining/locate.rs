use crate::parsing::Link;

/// An editor caret: zero-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPos {
    pub line: usize,
    pub col: usize,
}

impl CursorPos {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Which links an inlining request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateMode {
    /// The single link under the cursor, if any.
    Cursor(CursorPos),
    All,
}

/// Selects the links to inline from a document's link list.
///
/// In cursor mode a link matches when it starts and ends on the cursor's
/// line and the cursor column lies within it, touching either end included.
/// At most one link is returned; the first in document order wins.
pub fn locate(links: Vec<Link>, mode: LocateMode) -> Vec<Link> {
    match mode {
        LocateMode::All => links,
        LocateMode::Cursor(c) => links
            .into_iter()
            .find(|l| l.span.contains(c.line, c.col))
            .into_iter()
            .collect(),
    }
}
