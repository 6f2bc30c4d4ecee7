use std::fmt::Write;

use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, BlockNode, ContainerFrame},
    inline::InlineNode,
    links::Link,
    parse_inline_for_block,
    rope::slice::preview,
};

/// Renders parsed blocks and their inline nodes as stable, line-oriented
/// text for snapshot tests.
///
/// ```text
/// Paragraph 0..12 [Quote(1)] "> see [[A]]\n"
///   Text 2..6 "see "
///   WikiLink 6..11 "[[A]]" target=8..9
///   Text 11..12 "\n"
/// ```
pub fn normalize(rope: &Rope, blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        let kind = match &b.kind {
            BlockKind::Paragraph => "Paragraph".to_string(),
            BlockKind::FencedCode { kind } => format!("FencedCode({kind:?})"),
            BlockKind::FrontMatter => "FrontMatter".to_string(),
        };
        let containers = b
            .containers
            .iter()
            .map(|c| match c {
                ContainerFrame::BlockQuote { depth } => format!("Quote({depth})"),
            })
            .collect::<Vec<_>>();
        let _ = write!(out, "{kind} {}..{}", b.span.start, b.span.end);
        if !containers.is_empty() {
            let _ = write!(out, " [{}]", containers.join(", "));
        }
        let _ = writeln!(out, " {:?}", preview(rope, b.span, 60));

        for n in parse_inline_for_block(rope, b) {
            let sp = n.span();
            let label = match &n {
                InlineNode::Text(_) => "Text",
                InlineNode::CodeSpan { .. } => "CodeSpan",
                InlineNode::WikiLink { embed: true, .. } => "Embed",
                InlineNode::WikiLink { .. } => "WikiLink",
                InlineNode::MarkdownLink { embed: true, .. } => "MarkdownEmbed",
                InlineNode::MarkdownLink { .. } => "MarkdownLink",
            };
            let _ = write!(
                out,
                "  {label} {}..{} {:?}",
                sp.start,
                sp.end,
                preview(rope, sp, 40)
            );
            match n {
                InlineNode::WikiLink { target, alias, .. } => {
                    let _ = write!(out, " target={}..{}", target.start, target.end);
                    if let Some(a) = alias {
                        let _ = write!(out, " alias={}..{}", a.start, a.end);
                    }
                }
                InlineNode::MarkdownLink { dest, .. } => {
                    let _ = write!(out, " dest={}..{}", dest.start, dest.end);
                }
                InlineNode::Text(_) | InlineNode::CodeSpan { .. } => {}
            }
            out.push('\n');
        }
    }
    out
}

/// Renders extracted links one per line as `line:col-line:col kind link`.
pub fn render_links(links: &[Link]) -> String {
    let mut out = String::new();
    for l in links {
        let _ = write!(
            out,
            "{}:{}-{}:{} {} {:?}",
            l.span.start.line, l.span.start.col, l.span.end.line, l.span.end.col, l.kind, l.link
        );
        if let Some(text) = &l.display_text {
            let _ = write!(out, " as {text:?}");
        }
        out.push('\n');
    }
    out
}
