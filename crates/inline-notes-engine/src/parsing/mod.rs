//! # Parsing
//!
//! A two-phase markdown parser over the rope buffer, just deep enough to
//! find links reliably: block structure first (frontmatter, fences,
//! blockquotes, paragraphs), then inline constructs inside paragraphs.
//! Everything the parser produces is a byte span into the rope.

pub mod blocks;
pub mod inline;
pub mod links;
pub mod rope;
pub mod snapshot;


use xi_rope::Rope;

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier, kinds::FrontMatter};
use rope::{LineRef, Span, lines_with_spans, slice::slice_to_string};

pub use links::{Link, LinkKind, LinkSpan, extract_links};
pub use rope::Position;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// The YAML body of the frontmatter block, if the note has one.
    pub fn front_matter(&self) -> Option<&BlockNode> {
        self.blocks
            .first()
            .filter(|b| matches!(b.kind, BlockKind::FrontMatter))
    }
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let lines: Vec<LineRef> = lines_with_spans(rope).collect();
    let mut body = &lines[..];

    if let Some(close) = FrontMatter::detect(&lines) {
        let span = Span::new(lines[0].span.start, lines[close].span.end);
        let content = Span::new(lines[0].span.end, lines[close].span.start);
        builder.emit(BlockKind::FrontMatter, span, content);
        body = &lines[close + 1..];
    }

    for lr in body {
        let lc = classifier.classify(lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline parse for a given block node; raw zones yield nothing.
pub fn parse_inline_for_block(rope: &Rope, b: &BlockNode) -> Vec<inline::InlineNode> {
    if !b.kind.is_inline_eligible() {
        return vec![];
    }
    let s = slice_to_string(rope, b.content_span);
    inline::parse_inline(b.content_span.start, &s)
}
