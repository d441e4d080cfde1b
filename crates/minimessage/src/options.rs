//! Parse configuration.

use crate::error::Result;
use crate::node::StyledNode;
use crate::placeholder;

/// Default limit on hover-body nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Options controlling a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest hover-body nesting accepted. The top-level markup is depth 0
    /// and each hover body is one level deeper than the markup holding it.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A configured MiniMessage parser.
///
/// Holds only immutable options, so one instance can be shared freely across
/// threads; each call builds its own state.
///
/// # Examples
///
/// ```
/// use minimessage::MiniMessage;
///
/// let mm = MiniMessage::new().with_max_depth(4);
/// let node = mm.parse_with_placeholders("<gold>Hi <name>!", &["name", "Steve"]).unwrap();
/// assert_eq!(node.plain_text(), "Hi Steve!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MiniMessage {
    options: ParseOptions,
}

impl MiniMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Set the hover-body nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse markup into a styled tree.
    pub fn parse(&self, markup: &str) -> Result<StyledNode> {
        crate::parser::parse(markup, &self.options)
    }

    /// Substitute `<name>` placeholders from a flat `[name, value, ...]` list,
    /// then parse.
    pub fn parse_with_placeholders<S: AsRef<str>>(
        &self,
        markup: &str,
        placeholders: &[S],
    ) -> Result<StyledNode> {
        let markup = placeholder::handle_placeholders(markup, placeholders)?;
        self.parse(&markup)
    }

    /// Substitute `<name>` placeholders from `(name, value)` pairs, then parse.
    pub fn parse_with_map<I, K, V>(&self, markup: &str, placeholders: I) -> Result<StyledNode>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let markup = placeholder::handle_placeholder_map(markup, placeholders);
        self.parse(&markup)
    }
}
