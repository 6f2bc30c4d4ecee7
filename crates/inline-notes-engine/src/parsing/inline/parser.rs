use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, ESCAPE, MarkdownLink, WikiLink},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (typically a paragraph's content span)
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them.
/// `[[link]]` inside backticks is parsed as a code span, not a wikilink.
/// A backslash escape hides the next punctuation byte, so `\[[x]]` is text.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(ESCAPE) && cur.peek_at(1).is_some_and(|b| b.is_ascii_punctuation()) {
            cur.bump_n(2);
            continue;
        }
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_wikilink(&mut cur))
            .or_else(|| try_parse_markdown_link(&mut cur));
        if let Some(node) = node {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        // An unmatched backtick run is literal as a whole.
        let run = cur.run_len(CodeSpan::TICK).max(1);
        cur.bump_n(run);
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// The opening run of backticks must be matched by a run of the same length.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let open = cur.run_len(CodeSpan::TICK);
    if open == 0 {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open);
    let inner_start = cur.pos();

    while !cur.eof() {
        let run = cur.run_len(CodeSpan::TICK);
        if run == open {
            let inner_end = cur.pos();
            cur.bump_n(run);
            return Some(InlineNode::CodeSpan {
                full: Span::new(start, cur.pos()),
                inner: Span::new(inner_start, inner_end),
            });
        }
        cur.bump_n(run.max(1));
    }

    *cur = saved;
    None
}

/// Attempts to parse a wikilink (or `![[embed]]`) at the current position.
///
/// Handles both `[[target]]` and `[[target|alias]]` forms, plus the
/// table-escaped `[[target\|alias]]`. A link never spans lines and its
/// target may not be blank.
/// On failure, cursor position is restored.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let embed = cur.peek() == Some(WikiLink::EMBED);
    let prefix = usize::from(embed);
    if embed && !(cur.peek_at(1) == Some(b'[') && cur.peek_at(2) == Some(b'[')) {
        return None;
    }
    if !embed && !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(prefix + WikiLink::OPEN.len());
    let target_start = cur.pos();

    let stop = |cur: &Cursor<'_>| {
        cur.starts_with(WikiLink::CLOSE)
            || cur.starts_with(WikiLink::OPEN)
            || cur.peek() == Some(b'\n')
    };

    while !cur.eof() && !stop(cur) && cur.peek() != Some(WikiLink::ALIAS) {
        cur.bump();
    }
    let mut target_end = cur.pos();
    // Inside tables the alias pipe is written `\|`; the backslash is not
    // part of the target.
    if cur.peek() == Some(WikiLink::ALIAS)
        && cur.s[target_start - cur.base..target_end - cur.base].ends_with(char::from(ESCAPE))
    {
        target_end -= 1;
    }

    let mut alias = None;
    if cur.peek() == Some(WikiLink::ALIAS) {
        cur.bump();
        let alias_start = cur.pos();
        while !cur.eof() && !stop(cur) {
            cur.bump();
        }
        alias = Some(Span::new(alias_start, cur.pos()));
    }

    let target = Span::new(target_start, target_end);
    let target_text = &cur.s[target_start - cur.base..target_end - cur.base];
    if !cur.starts_with(WikiLink::CLOSE) || target_text.trim().is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump_n(WikiLink::CLOSE.len());

    Some(InlineNode::WikiLink {
        full: Span::new(start, cur.pos()),
        target,
        alias,
        embed,
    })
}

/// Attempts to parse `[text](dest)` or `![text](dest)`.
///
/// The destination is either `<...>` or a run without spaces, with balanced
/// parentheses. An optional quoted title may follow it.
/// On failure, cursor position is restored.
fn try_parse_markdown_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let embed = cur.peek() == Some(MarkdownLink::EMBED);
    let prefix = usize::from(embed);
    if cur.peek_at(prefix) != Some(MarkdownLink::TEXT_OPEN)
        || cur.peek_at(prefix + 1) == Some(MarkdownLink::TEXT_OPEN)
    {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(prefix + 1);

    let result = parse_link_tail(cur).map(|(text, dest)| InlineNode::MarkdownLink {
        full: Span::new(start, cur.pos()),
        text,
        dest,
        embed,
    });
    if result.is_none() {
        *cur = saved;
    }
    result
}

/// Parses everything after the opening `[`, returning (text, dest) spans.
fn parse_link_tail(cur: &mut Cursor<'_>) -> Option<(Span, Span)> {
    let text_start = cur.pos();
    let mut depth = 0usize;
    loop {
        match cur.peek()? {
            b'\n' => return None,
            ESCAPE => cur.bump_n(2),
            MarkdownLink::TEXT_OPEN => {
                depth += 1;
                cur.bump();
            }
            MarkdownLink::TEXT_CLOSE if depth == 0 => break,
            MarkdownLink::TEXT_CLOSE => {
                depth -= 1;
                cur.bump();
            }
            _ => {
                cur.bump();
            }
        }
    }
    let text = Span::new(text_start, cur.pos());
    cur.bump();

    if cur.peek() != Some(MarkdownLink::DEST_OPEN) {
        return None;
    }
    cur.bump();
    cur.bump_while(|b| b == b' ');

    let dest = if cur.peek() == Some(MarkdownLink::ANGLE_OPEN) {
        cur.bump();
        let dest_start = cur.pos();
        cur.bump_while(|b| b != MarkdownLink::ANGLE_CLOSE && b != b'\n');
        if cur.peek() != Some(MarkdownLink::ANGLE_CLOSE) {
            return None;
        }
        let dest = Span::new(dest_start, cur.pos());
        cur.bump();
        dest
    } else {
        let dest_start = cur.pos();
        let mut parens = 0usize;
        while let Some(b) = cur.peek() {
            match b {
                b' ' | b'\t' | b'\n' => break,
                MarkdownLink::DEST_OPEN => parens += 1,
                MarkdownLink::DEST_CLOSE if parens == 0 => break,
                MarkdownLink::DEST_CLOSE => parens -= 1,
                _ => {}
            }
            cur.bump();
        }
        Span::new(dest_start, cur.pos())
    };

    cur.bump_while(|b| b == b' ');
    if let Some(q @ (b'"' | b'\'')) = cur.peek() {
        cur.bump();
        cur.bump_while(|b| b != q && b != b'\n');
        if cur.peek() != Some(q) {
            return None;
        }
        cur.bump();
        cur.bump_while(|b| b == b' ');
    }

    if cur.peek() != Some(MarkdownLink::DEST_CLOSE) {
        return None;
    }
    cur.bump();
    Some((text, dest))
}
