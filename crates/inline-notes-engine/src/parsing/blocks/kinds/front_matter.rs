use crate::parsing::rope::LineRef;

/// YAML frontmatter at the very top of a note.
///
/// Frontmatter is a raw zone: links written in it belong to note metadata
/// and are never inlined.
pub struct FrontMatter;

impl FrontMatter {
    pub const DELIMITER: &'static str = "---";
    /// YAML's document end marker is also accepted as a closer.
    pub const ALT_CLOSER: &'static str = "...";

    fn is_line(lr: &LineRef, marker: &str) -> bool {
        lr.text.trim_end_matches(['\r', '\n']).trim_end() == marker
    }

    /// Returns the index of the closing delimiter line when `lines` starts
    /// with a frontmatter block.
    pub fn detect(lines: &[LineRef]) -> Option<usize> {
        let first = lines.first()?;
        if !Self::is_line(first, Self::DELIMITER) {
            return None;
        }
        lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, lr)| {
                Self::is_line(lr, Self::DELIMITER) || Self::is_line(lr, Self::ALT_CLOSER)
            })
            .map(|(i, _)| i)
    }
}
