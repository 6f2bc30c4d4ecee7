#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a line looks like if it could open or close a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters in the run (at least 3).
    pub len: usize,
    /// Whether anything other than whitespace follows the run.
    pub has_info: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    /// Detects a fence run at the start of `remainder`, allowing up to three
    /// spaces of indentation.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.bytes().take_while(|&b| b == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];
        let kind = match t.as_bytes().first() {
            Some(&Self::BACKTICK) => FenceKind::Backticks,
            Some(&Self::TILDE) => FenceKind::Tildes,
            _ => return None,
        };
        let ch = t.as_bytes()[0];
        let len = t.bytes().take_while(|&b| b == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            has_info: !t[len..].trim().is_empty(),
        })
    }

    /// A closing fence uses the same character, is at least as long as the
    /// opener and carries no info string.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        match sig {
            Some(s) => s.kind == open.kind && s.len >= open.len && !s.has_info,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence(kind: FenceKind, len: usize) -> FenceSig {
        FenceSig {
            kind,
            len,
            has_info: false,
        }
    }

    #[test]
    fn detect_backtick_fence_with_info() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                kind: FenceKind::Backticks,
                len: 3,
                has_info: true
            })
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(CodeFence::sig("~~~~\n"), Some(fence(FenceKind::Tildes, 4)));
    }

    #[test]
    fn two_ticks_are_not_a_fence() {
        assert_eq!(CodeFence::sig("``x``"), None);
    }

    #[test]
    fn deep_indent_is_not_a_fence() {
        assert_eq!(CodeFence::sig("    ```"), None);
        assert!(CodeFence::sig("   ```").is_some());
    }

    #[test]
    fn shorter_run_does_not_close_longer_fence() {
        let open = fence(FenceKind::Backticks, 4);
        assert!(!CodeFence::closes(open, CodeFence::sig("```")));
        assert!(CodeFence::closes(open, CodeFence::sig("`````")));
    }

    #[test]
    fn does_not_close_mismatched_or_info_fence() {
        let open = fence(FenceKind::Backticks, 3);
        assert!(!CodeFence::closes(open, CodeFence::sig("~~~")));
        assert!(!CodeFence::closes(open, CodeFence::sig("```js")));
        assert!(!CodeFence::closes(open, None));
    }
}
