//! MiniMessage markup parser.
//!
//! This crate converts MiniMessage markup, text like
//! `<red>Hello</red> <bold>World`, into a tree of [`StyledNode`]s that a
//! rich-text display can render.
//!
//! # Overview
//!
//! Tags use angle brackets:
//!
//! - `<red>text</red>` - Palette color; any color close pops the latest color
//! - `<bold>text</bold>` - Decoration: `bold`, `italic`, `underlined`,
//!   `strikethrough`, `obfuscated`
//! - `<click:run_command:/help>text</click>` - Click action with payload
//! - `<hover:show_text:"<gold>tooltip">text</hover>` - Hover action whose
//!   quoted body is itself markup
//! - `<unknown>` - Anything else stays in the output as literal text
//!
//! Unbalanced close tags are ignored. Malformed click or hover tags fail the
//! whole parse.
//!
//! # Usage
//!
//! ```
//! use minimessage::{Color, Decoration, strip_tokens};
//!
//! let node = minimessage::parse("<red>a<bold>b</bold></red>c").unwrap();
//! let children = node.children();
//! assert_eq!(children[0].color(), Some(Color::Red));
//! assert!(children[1].has_decoration(Decoration::Bold));
//! assert!(children[2].is_plain());
//!
//! assert_eq!(strip_tokens("<red>a<bold>b</bold></red>c"), "abc");
//! ```

pub mod color;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod placeholder;
pub mod style;
pub mod tokens;

// Re-export main types at crate root
pub use color::Color;
pub use error::{MiniMessageError, Result};
pub use node::{StyledNode, StyledNodeBuilder};
pub use options::{DEFAULT_MAX_DEPTH, MiniMessage, ParseOptions};
pub use placeholder::{handle_placeholder_map, handle_placeholders};
pub use style::{
    ClickAction, ClickEvent, Decoration, Decorations, HoverAction, HoverEvent, Style,
};
pub use tokens::{escape_tokens, strip_tokens};

/// Parse markup with default options.
pub fn parse(markup: &str) -> Result<StyledNode> {
    parser::parse(markup, &ParseOptions::default())
}

/// Substitute `<name>` placeholders from a flat `[name, value, ...]` list,
/// then parse with default options.
///
/// Fails with [`MiniMessageError::InvalidArgument`] on an odd-length list.
pub fn parse_with_placeholders<S: AsRef<str>>(
    markup: &str,
    placeholders: &[S],
) -> Result<StyledNode> {
    MiniMessage::new().parse_with_placeholders(markup, placeholders)
}

/// Substitute `<name>` placeholders from `(name, value)` pairs, then parse
/// with default options.
pub fn parse_with_map<I, K, V>(markup: &str, placeholders: I) -> Result<StyledNode>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    MiniMessage::new().parse_with_map(markup, placeholders)
}
