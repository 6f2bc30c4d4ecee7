/// Blockquote block type with owned delimiter constant.
///
/// Callouts (`> [!note]`) are blockquotes too, so links inside them are
/// found once the prefixes are stripped.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';
    /// Spaces allowed before each `>`.
    pub const MAX_INDENT: usize = 3;

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' && j - i < Self::MAX_INDENT {
                j += 1;
            }
            if j < b.len() && b[j] == Self::PREFIX {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}
