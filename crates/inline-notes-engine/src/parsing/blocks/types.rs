use crate::parsing::rope::span::Span;

use super::kinds::FenceKind;

/// A frame in the container stack representing a nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    /// Links are only ever extracted from paragraphs.
    Paragraph,
    /// A fenced code block (``` or ~~~). Raw zone.
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
    },
    /// YAML frontmatter at the top of the note. Raw zone.
    FrontMatter,
}

impl BlockKind {
    /// Whether inline constructs (links, code spans) are parsed inside.
    #[must_use]
    pub fn is_inline_eligible(&self) -> bool {
        matches!(self, BlockKind::Paragraph)
    }
}

/// A parsed block node with its containers, kind, and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    /// The kind of leaf block.
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Content span for inline parsing (excludes the first line's `>`
    /// prefixes). For frontmatter, the YAML between the delimiters.
    pub content_span: Span,
}
