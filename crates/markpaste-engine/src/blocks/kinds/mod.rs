//! Block-specific syntax knowledge.
//!
//! Each block kind owns its delimiters and detection rules here, so the
//! classifier and segmenter never hard-code syntax themselves.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use table::TableRow;
