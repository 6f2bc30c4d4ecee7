//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` ` `` runs, raw zone that suppresses other parsing
//! - **`WikiLink`**: `[[`, `]]`, `|` and the `!` embed prefix
//! - **`MarkdownLink`**: `[text](dest)` delimiters
//! - **`Comment`**: `%%` and `<!-- -->`, hiding links until closed
//!
//! The parser calls these constants; it never hardcodes `[[` or `` ` ``.

pub mod code_span;
pub mod comment;
pub mod markdown_link;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use comment::Comment;
pub use markdown_link::{ESCAPE, MarkdownLink};
pub use wikilink::WikiLink;
