//! Tree builder for MiniMessage markup.
//!
//! Walks the scanner's matches once, stamping each literal span with the
//! active style and collecting the resulting nodes under an implicit root.

use crate::error::{MiniMessageError, Result};
use crate::node::StyledNode;
use crate::options::ParseOptions;

use super::scanner::Scanner;
use super::tag::{Disposition, StyleState, Tag};

/// Parses MiniMessage markup into a styled tree.
///
/// Every call owns its own style state, so parses never share context; hover
/// bodies are parsed by a nested call one level deeper.
///
/// # Examples
///
/// ```
/// use minimessage::parser::parse;
/// use minimessage::{Color, ParseOptions};
///
/// let node = parse("<red>Hello</red> World", &ParseOptions::default()).unwrap();
/// assert_eq!(node.children().len(), 2);
/// assert_eq!(node.children()[0].color(), Some(Color::Red));
/// ```
pub fn parse(input: &str, options: &ParseOptions) -> Result<StyledNode> {
    parse_at_depth(input, options, 0)
}

fn parse_at_depth(input: &str, options: &ParseOptions, depth: usize) -> Result<StyledNode> {
    if depth > options.max_depth {
        return Err(MiniMessageError::TooDeep(options.max_depth));
    }

    let mut builder = TreeBuilder::new();
    let mut last_end = 0;

    for m in Scanner::new(input) {
        builder.push_text(&input[last_end..m.start]);
        last_end = m.end;

        let tag = Tag::parse(m.token, m.inner(), |body| {
            parse_at_depth(body, options, depth + 1)
        })?;
        if builder.state.apply(tag) == Disposition::Unrecognized {
            log::debug!("unrecognized tag <{}> kept as text", m.token);
            builder.push_text(&input[m.start..m.end]);
        }
    }
    builder.push_text(&input[last_end..]);

    Ok(builder.finish())
}

/// Accumulates the children of the implicit root.
struct TreeBuilder {
    state: StyleState,
    children: Vec<StyledNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            state: StyleState::new(),
            children: Vec::new(),
        }
    }

    /// Append a literal span with the active style; empty spans are skipped.
    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.children.push(self.state.text_node(text));
        }
    }

    /// Build the root, collapsing it into its only child when it would be an
    /// empty wrapper.
    fn finish(mut self) -> StyledNode {
        if self.children.len() == 1 {
            if let Some(only) = self.children.pop() {
                return only;
            }
        }
        StyledNode::builder("").children(self.children).build()
    }
}
