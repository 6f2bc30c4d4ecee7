use std::fmt;

use relative_path::RelativePathBuf;

use crate::parsing::Link;

/// Why a link was left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No file matches the link.
    Unresolved,
    /// The file exists but has no metadata (not an indexed note).
    Unindexed,
    /// Reading the file failed.
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::Unresolved => "unresolved",
            SkipReason::Unindexed => "unindexed",
            SkipReason::Unreadable => "unreadable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Inlined { target: RelativePathBuf },
    Skipped(SkipReason),
}

/// What happened to one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResult {
    pub link: Link,
    pub outcome: LinkOutcome,
}

/// Outcomes of one inlining pass, in the order links were processed
/// (descending start offset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub results: Vec<LinkResult>,
}

impl PassReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn inlined(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, LinkOutcome::Inlined { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results.len() - self.inlined()
    }
}

/// Outcomes of a recursive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecursiveReport {
    pub passes: Vec<PassReport>,
    /// Links were still pending when the iteration cap stopped the loop.
    pub halted_by_cap: bool,
}

impl RecursiveReport {
    pub fn iterations(&self) -> usize {
        self.passes.len()
    }

    pub fn inlined(&self) -> usize {
        self.passes.iter().map(PassReport::inlined).sum()
    }

    pub fn skipped(&self) -> usize {
        self.passes.iter().map(PassReport::skipped).sum()
    }
}
