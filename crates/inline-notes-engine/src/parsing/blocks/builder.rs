use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceSig},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode, ContainerFrame},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        content_start: Span,
        last_line_end: usize,
    },
    Fence {
        open: FenceSig,
        start: Span,
        last_line_end: usize,
    },
}

/// Phase 2 of block parsing: folds classified lines into block nodes.
pub struct BlockBuilder {
    containers: Vec<ContainerFrame>,
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// Records a block that was recognised outside the line loop
    /// (frontmatter is detected before classification starts).
    pub fn emit(&mut self, kind: BlockKind, span: Span, content_span: Span) {
        self.out.push(BlockNode {
            containers: Vec::new(),
            kind,
            span,
            content_span,
        });
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        // A change of quote depth ends the current paragraph.
        if c.quote_depth != self.quote_depth() {
            self.flush_paragraph();
            self.set_quote_depth(c.quote_depth);
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(open) = try_open_leaf(c) {
            self.flush_paragraph();
            self.open_leaf(open, c.line);
            return;
        }

        self.extend_paragraph(c.line, c.remainder_span);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn quote_depth(&self) -> u8 {
        match self.containers.last() {
            Some(ContainerFrame::BlockQuote { depth }) => *depth,
            None => 0,
        }
    }

    fn set_quote_depth(&mut self, depth: u8) {
        self.containers.clear();
        if depth > 0 {
            self.containers.push(ContainerFrame::BlockQuote { depth });
        }
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen, line: Span) {
        match open {
            BlockOpen::FencedCode { sig } => {
                self.leaf = LeafState::Fence {
                    open: sig,
                    start: line,
                    last_line_end: line.end,
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { open, start, .. } = self.leaf else {
            return;
        };

        self.leaf = LeafState::Fence {
            open,
            start,
            last_line_end: c.line.end,
        };
        if CodeFence::closes(open, c.fence_sig) {
            self.flush_fence();
        }
    }

    fn extend_paragraph(&mut self, line: Span, content_span: Span) {
        match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => {
                self.leaf = LeafState::Paragraph {
                    start,
                    content_start,
                    last_line_end: line.end,
                };
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: line,
                    content_start: content_span,
                    last_line_end: line.end,
                };
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            content_start,
            last_line_end,
        } = prev
        {
            self.out.push(BlockNode {
                containers: self.containers.clone(),
                kind: BlockKind::Paragraph,
                span: Span::new(start.start, last_line_end),
                content_span: Span::new(content_start.start, last_line_end),
            });
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            open,
            start,
            last_line_end,
        } = prev
        {
            // Unterminated fences run to EOF and still hide their contents.
            self.out.push(BlockNode {
                containers: self.containers.clone(),
                kind: BlockKind::FencedCode { kind: open.kind },
                span: Span::new(start.start, last_line_end),
                content_span: Span::new(start.start, last_line_end),
            });
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
