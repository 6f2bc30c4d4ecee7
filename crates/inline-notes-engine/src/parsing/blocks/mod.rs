//! # Block Parsing
//!
//! Two-phase block parsing, just deep enough to know where links may live.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (blockquote depth, fence signature, blank status).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds the lines
//!    into `BlockNode`s as paragraphs and fences open and close.
//!
//! Frontmatter is recognised before phase 1 because it is only valid at the
//! very top of a note.
//!
//! ## Key Invariants
//!
//! - Fenced code and frontmatter are raw zones: no inline parsing inside
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ContainerFrame};
