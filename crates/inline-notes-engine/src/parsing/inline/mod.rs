//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing is separate from block parsing and operates over the
//! content span of paragraphs only.
//!
//! - Code spans suppress all other inline parsing inside them
//! - WikiLinks, embeds and markdown links are parsed only outside raw zones
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[[not a link]]` `` parses as a single CodeSpan,
//! not as text containing a WikiLink.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
