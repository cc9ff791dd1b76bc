//! # Inline Transformation
//!
//! Cursor-based single-pass parsing of leaf-block text into
//! [`InlineNode`]s. Verbatim code blocks never pass through here.
//!
//! Precedence is fixed and load-bearing: code spans are raw zones that
//! suppress everything else, emphasis runs before link rules, and link
//! rules track consumption so autolinks never fire inside an anchor.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::LinkRules;
pub use parser::InlineParser;
pub use types::InlineNode;
