//! # Inlining
//!
//! Replaces links with the content of the notes they point at.
//!
//! The pipeline has three stages:
//!
//! 1. **`locate`** picks the links a request covers (the one under the
//!    cursor, or all of them).
//! 2. **`planner`** resolves each link through the [`Vault`](crate::vault::Vault),
//!    wraps the target's content in provenance tags (**`wrap`**) and applies
//!    the replacement at once, last link first.
//! 3. **`recursive`** repeats 1 and 2 against the edited note until no
//!    unseen links remain or the iteration cap is reached.
//!
//! Links that cannot be inlined are skipped, never errors; **`report`**
//! records what happened to each.

pub mod inliner;
pub mod locate;
pub mod planner;
pub mod recursive;
pub mod report;
pub mod wrap;

pub use inliner::Inliner;
pub use locate::{CursorPos, LocateMode, locate};
pub use planner::{Edit, Planner};
pub use recursive::{RecordKey, RecursiveDriver};
pub use report::{LinkOutcome, LinkResult, PassReport, RecursiveReport, SkipReason};
pub use wrap::{InlineOptions, ProvenanceTag, wrap};
