pub mod lines;
pub mod position;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use position::{Position, position_at};
pub use slice::{preview, slice_to_string};
pub use span::Span;
