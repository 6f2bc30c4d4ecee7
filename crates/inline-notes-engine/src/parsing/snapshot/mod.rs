//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: renders parsed blocks, inline nodes and extracted links
//!   as stable text for `insta` snapshots
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   content spans inside their block, raw zones produce no links)
//!
//! Parsing behaviour is pinned down by snapshot tests rather than a formal
//! grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{normalize, render_links};
