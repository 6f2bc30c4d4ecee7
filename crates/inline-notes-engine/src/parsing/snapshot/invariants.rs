use xi_rope::Rope;

use crate::parsing::{blocks::BlockNode, links::Link, rope::slice_to_string};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block and content spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Every link lies inside an inline-eligible block and its `original`
///   text is exactly what its span covers
/// - Links come in document order and never overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode], links: &[Link]) {
    let n = rope.len();
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.content_span.start >= b.span.start && b.content_span.end <= b.span.end,
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
    }

    for l in links {
        let sp = l.span.bytes();
        assert!(
            sp.start <= sp.end && sp.end <= n,
            "link span out of bounds: {sp:?} (rope len: {n})"
        );
        assert_eq!(slice_to_string(rope, sp), l.original, "link span drifted");
        let home = blocks
            .iter()
            .find(|b| b.content_span.start <= sp.start && sp.end <= b.content_span.end);
        assert!(
            home.is_some_and(|b| b.kind.is_inline_eligible()),
            "link {:?} found outside a paragraph",
            l.original
        );
    }

    for pair in links.windows(2) {
        let (a, b) = (pair[0].span.bytes(), pair[1].span.bytes());
        assert!(
            a.end <= b.start && !a.overlaps(b),
            "links out of order or overlapping: {a:?} then {b:?}"
        );
    }
}
