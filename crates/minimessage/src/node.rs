//! Styled text tree produced by the parser.

use std::fmt;

use crate::color::Color;
use crate::style::{ClickEvent, Decoration, Decorations, HoverEvent, Style};

/// An immutable node of styled text.
///
/// Each node carries its own text, its resolved [`Style`] and an ordered list
/// of children it exclusively owns. Nodes are built with
/// [`StyledNode::builder`] or produced by [`crate::parse`].
///
/// # Examples
///
/// ```
/// use minimessage::{Color, StyledNode};
///
/// let node = StyledNode::parse("<red>Hello</red> World").unwrap();
/// assert_eq!(node.plain_text(), "Hello World");
/// assert_eq!(node.children()[0].color(), Some(Color::Red));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledNode {
    content: String,
    style: Style,
    children: Vec<StyledNode>,
}

impl StyledNode {
    /// Create an unstyled leaf node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Start building a node with the given text.
    pub fn builder(content: impl Into<String>) -> StyledNodeBuilder {
        StyledNodeBuilder::new(content)
    }

    /// Parse MiniMessage markup with default options.
    pub fn parse(markup: &str) -> crate::Result<Self> {
        crate::parse(markup)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn color(&self) -> Option<Color> {
        self.style.color
    }

    pub fn decorations(&self) -> Decorations {
        self.style.decorations
    }

    /// Check whether a single decoration is set on this node.
    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.style.decorations.has(decoration)
    }

    pub fn click(&self) -> Option<&ClickEvent> {
        self.style.click.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverEvent> {
        self.style.hover.as_ref()
    }

    pub fn children(&self) -> &[StyledNode] {
        &self.children
    }

    /// Returns true if the node has no style and no children.
    pub fn is_plain(&self) -> bool {
        self.style.is_empty() && self.children.is_empty()
    }

    /// Concatenated text of this node and all descendants, in document order.
    ///
    /// Hover trees are not part of the visible text and are skipped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Decompose into content, style and children.
    pub fn into_parts(self) -> (String, Style, Vec<StyledNode>) {
        (self.content, self.style, self.children)
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?}", "", self.content, indent = depth * 2)?;
        if !self.style.is_empty() {
            write!(f, " {}", self.style)?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for StyledNode {
    /// One line per node, children indented by two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Builder for [`StyledNode`].
#[derive(Clone, Debug, Default)]
pub struct StyledNodeBuilder {
    content: String,
    style: Style,
    children: Vec<StyledNode>,
}

impl StyledNodeBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Replace the whole style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.style.decorations.insert(decoration.flag());
        self
    }

    pub fn decorations(mut self, decorations: Decorations) -> Self {
        self.style.decorations = decorations;
        self
    }

    pub fn click(mut self, click: ClickEvent) -> Self {
        self.style.click = Some(click);
        self
    }

    pub fn hover(mut self, hover: HoverEvent) -> Self {
        self.style.hover = Some(hover);
        self
    }

    pub fn child(mut self, child: StyledNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = StyledNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> StyledNode {
        StyledNode {
            content: self.content,
            style: self.style,
            children: self.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClickAction, HoverAction};

    #[test]
    fn text_node_is_plain() {
        let node = StyledNode::text("hello");
        assert_eq!(node.content(), "hello");
        assert!(node.is_plain());
        assert!(node.children().is_empty());
    }

    #[test]
    fn builder_sets_style() {
        let node = StyledNode::builder("hi")
            .color(Color::Aqua)
            .decoration(Decoration::Bold)
            .decoration(Decoration::Italic)
            .click(ClickEvent::new(ClickAction::OpenUrl, "https://example.com"))
            .build();

        assert_eq!(node.color(), Some(Color::Aqua));
        assert!(node.has_decoration(Decoration::Bold));
        assert!(node.has_decoration(Decoration::Italic));
        assert!(!node.has_decoration(Decoration::Underlined));
        assert_eq!(node.click().map(|c| c.action), Some(ClickAction::OpenUrl));
        assert!(node.hover().is_none());
    }

    #[test]
    fn plain_text_skips_hover_trees() {
        let hover = HoverEvent::new(HoverAction::ShowText, StyledNode::text("tooltip"));
        let node = StyledNode::builder("")
            .child(StyledNode::builder("a").hover(hover).build())
            .child(StyledNode::text("b"))
            .build();

        assert_eq!(node.plain_text(), "ab");
    }

    #[test]
    fn display_renders_tree() {
        let node = StyledNode::builder("")
            .child(StyledNode::builder("a").color(Color::Red).build())
            .child(StyledNode::text("b"))
            .build();

        assert_eq!(node.to_string(), "\"\"\n  \"a\" color=red\n  \"b\"");
    }
}
