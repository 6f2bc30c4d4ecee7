use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo};

/// An edit to a note buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Replace `range` with `text`.
    ReplaceRange { range: Range<usize>, text: String },
}

/// Compiles a command to a delta over a buffer of `len` bytes.
///
/// Offsets are clamped to the buffer so a stale range cannot panic inside
/// xi-rope.
pub fn compile_command(len: usize, cmd: &Cmd) -> Delta<RopeInfo> {
    let Cmd::ReplaceRange { range, text } = cmd;
    let start = range.start.min(len);
    let end = range.end.min(len).max(start);
    Delta::simple_edit(start..end, Rope::from(text.as_str()), len)
}
