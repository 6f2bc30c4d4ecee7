//! Link extraction: turns a rope into the list of links a note contains.

use std::fmt;

use xi_rope::Rope;

use super::{
    inline::{InlineNode, kinds::Comment},
    parse_document, parse_inline_for_block,
    rope::{Position, Span, position_at, slice_to_string},
};

/// The syntactic form a link was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `[[target]]` or `[[target|alias]]`
    Wiki,
    /// `![[target]]` or `![alt](target.md)`
    Embed,
    /// `[text](target.md)`
    Markdown,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkKind::Wiki => "wiki",
            LinkKind::Embed => "embed",
            LinkKind::Markdown => "markdown",
        };
        f.write_str(s)
    }
}

/// Where a link sits in the snapshot it was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkSpan {
    pub start: Position,
    pub end: Position,
}

impl LinkSpan {
    /// Whether `(line, col)` falls inside the link, both ends inclusive.
    /// Links spanning several lines never match.
    pub fn contains(&self, line: usize, col: usize) -> bool {
        self.start.line == line
            && self.end.line == line
            && self.start.col <= col
            && col <= self.end.col
    }

    pub fn bytes(&self) -> Span {
        Span::new(self.start.offset, self.end.offset)
    }
}

/// One link occurrence in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Raw link text as written, e.g. `A#Heading` for `[[A#Heading|x]]`.
    pub link: String,
    /// The full source text of the link, delimiters included.
    pub original: String,
    /// Alias or markdown link text, when present.
    pub display_text: Option<String>,
    pub kind: LinkKind,
    pub span: LinkSpan,
}

/// Extracts every link from the current content of `rope`, in document
/// order. Links in frontmatter, fenced code, code spans and comments are
/// skipped, as are markdown links pointing outside the vault.
pub fn extract_links(rope: &Rope) -> Vec<Link> {
    let doc = parse_document(rope);
    let mut comment = CommentState::default();
    let mut out = Vec::new();

    for block in &doc.blocks {
        for node in parse_inline_for_block(rope, block) {
            if let InlineNode::Text(sp) = node {
                comment.scan(&slice_to_string(rope, sp));
            } else if !comment.is_open()
                && let Some(link) = link_from_node(rope, &node)
            {
                out.push(link);
            }
        }
    }
    out
}

/// Whether extraction is inside a `%%` or `<!-- -->` comment. Delimiters
/// are only looked for in plain text, so code spans cannot open or close
/// one. An unclosed comment runs to the end of the note.
#[derive(Debug, Default)]
struct CommentState {
    close: Option<&'static str>,
}

impl CommentState {
    fn is_open(&self) -> bool {
        self.close.is_some()
    }

    fn scan(&mut self, mut text: &str) {
        loop {
            match self.close {
                Some(close) => match text.find(close) {
                    Some(i) => {
                        text = &text[i + close.len()..];
                        self.close = None;
                    }
                    None => return,
                },
                None => {
                    let next = Comment::PAIRS
                        .iter()
                        .filter_map(|&(open, close)| text.find(open).map(|i| (i, open, close)))
                        .min_by_key(|&(i, ..)| i);
                    match next {
                        Some((i, open, close)) => {
                            text = &text[i + open.len()..];
                            self.close = Some(close);
                        }
                        None => return,
                    }
                }
            }
        }
    }
}

fn link_from_node(rope: &Rope, node: &InlineNode) -> Option<Link> {
    let (link, display_text, kind) = match node {
        InlineNode::WikiLink {
            target,
            alias,
            embed,
            ..
        } => (
            slice_to_string(rope, *target).trim().to_string(),
            alias.map(|a| slice_to_string(rope, a)),
            if *embed { LinkKind::Embed } else { LinkKind::Wiki },
        ),
        InlineNode::MarkdownLink {
            text, dest, embed, ..
        } => {
            let dest = slice_to_string(rope, *dest);
            if !is_internal_destination(&dest) {
                return None;
            }
            let text = slice_to_string(rope, *text);
            (
                percent_decode(&dest),
                (!text.is_empty()).then_some(text),
                if *embed {
                    LinkKind::Embed
                } else {
                    LinkKind::Markdown
                },
            )
        }
        InlineNode::Text(_) | InlineNode::CodeSpan { .. } => return None,
    };

    let full = node.span();
    Some(Link {
        link,
        original: slice_to_string(rope, full),
        display_text,
        kind,
        span: LinkSpan {
            start: position_at(rope, full.start),
            end: position_at(rope, full.end),
        },
    })
}

/// A destination is internal unless it is empty, a same-note anchor or
/// carries a URI scheme (`https:`, `mailto:`, `obsidian:` ...).
fn is_internal_destination(dest: &str) -> bool {
    if dest.is_empty() || dest.starts_with('#') {
        return false;
    }
    let scheme_len = dest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        .count();
    let has_scheme = scheme_len > 0
        && dest.as_bytes()[0].is_ascii_alphabetic()
        && dest.as_bytes().get(scheme_len) == Some(&b':');
    !has_scheme
}

/// Decodes `%XX` escapes; the input is returned unchanged when the decoded
/// bytes are not valid UTF-8.
fn percent_decode(s: &str) -> String {
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%'
            && let Some(hex) = s.get(i + 1..i + 3)
            && hex.bytes().all(|c| c.is_ascii_hexdigit())
            && let Ok(v) = u8::from_str_radix(hex, 16)
        {
            out.push(v);
            i += 3;
            continue;
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| s.to_string())
}
