pub mod block_quote;
pub mod code_fence;
pub mod front_matter;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use front_matter::FrontMatter;
