use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the rope.
///
/// All variants store spans rather than text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A wiki-style link `[[target]]` or `[[target|alias]]`.
    WikiLink {
        /// Full span including `[[` and `]]` (and a leading `!` for embeds).
        full: Span,
        /// Span of the target (page name plus optional `#subpath`).
        target: Span,
        /// Span of the alias if present (after `|`).
        alias: Option<Span>,
        embed: bool,
    },
    /// A markdown link `[text](dest)` or `![text](dest)`.
    MarkdownLink {
        full: Span,
        text: Span,
        /// Destination without angle brackets or title.
        dest: Span,
        embed: bool,
    },
}

impl InlineNode {
    /// The full span of any variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::WikiLink { full, .. }
            | InlineNode::MarkdownLink { full, .. } => *full,
        }
    }
}
