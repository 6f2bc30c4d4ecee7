use super::{classify::LineClass, kinds::FenceSig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { sig: FenceSig },
}

/// Decides whether a classified line opens a non-paragraph leaf block.
pub fn try_open_leaf(c: &LineClass) -> Option<BlockOpen> {
    // Fence beats everything else; the classifier already computed the sig.
    c.fence_sig.map(|sig| BlockOpen::FencedCode { sig })
}
