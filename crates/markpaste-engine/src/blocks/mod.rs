//! # Block Segmentation
//!
//! Two-phase block parsing.
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    [`LineClass`] of local facts (blank status, quote depth, indentation,
//!    fence/heading/list/table signatures).
//! 2. **Segmentation** (`segmenter`): a walker over the classified lines,
//!    with one line of lookahead, emits typed [`Block`] nodes in document
//!    order.
//!
//! Syntax knowledge for each block kind lives in `kinds`; the classifier
//! and segmenter only orchestrate.

pub mod classify;
pub mod kinds;
pub mod segmenter;
pub mod types;

pub use classify::{LineClass, LineClassifier};
pub use segmenter::segment;
pub use types::{Block, CellAlign, ListItem};
