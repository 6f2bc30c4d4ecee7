use xi_rope::Rope;

/// A point in document coordinates.
///
/// `line` and `col` are zero-based; `col` counts bytes from the start of the
/// line and `offset` counts bytes from the start of the document. Positions
/// describe one frozen snapshot of a buffer and go stale on the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, col: usize, offset: usize) -> Self {
        Self { line, col, offset }
    }
}

/// Computes the line/column position of a byte offset.
///
/// Offsets past the end of the rope are clamped to its length.
pub fn position_at(rope: &Rope, offset: usize) -> Position {
    let offset = offset.min(rope.len());
    let line = rope.line_of_offset(offset);
    let line_start = rope.offset_of_line(line);
    Position {
        line,
        col: offset - line_start,
        offset,
    }
}
