//! Inline-specific syntax knowledge. Each construct owns its delimiters
//! and token patterns here.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::LinkRules;
