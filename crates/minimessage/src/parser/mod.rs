//! Parser for MiniMessage markup.
//!
//! This module contains the tag scanner, the tag classifier with its style
//! state, and the tree builder.

mod builder;
mod scanner;
mod tag;

pub use builder::parse;
pub use scanner::{CLOSE_TAG, ESCAPE, QUOTE, SEPARATOR, Scanner, TAG_END, TAG_START, TagMatch};
pub use tag::{CLICK, Disposition, HOVER, StyleState, Tag};
