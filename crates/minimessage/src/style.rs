//! Style types for MiniMessage markup.
//!
//! A [`Style`] is the resolved formatting context stamped onto each text node:
//! an optional color, a decoration set, and optional click and hover actions.

use std::fmt;

use bitflags::bitflags;

use crate::color::Color;
use crate::node::StyledNode;

/// A single text decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl Decoration {
    pub const ALL: [Decoration; 5] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::Underlined,
        Decoration::Strikethrough,
        Decoration::Obfuscated,
    ];

    /// Look up a decoration by tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|decoration| decoration.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Decoration::Bold => "bold",
            Decoration::Italic => "italic",
            Decoration::Underlined => "underlined",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Obfuscated => "obfuscated",
        }
    }

    /// The bit for this decoration in a [`Decorations`] set.
    pub fn flag(self) -> Decorations {
        match self {
            Decoration::Bold => Decorations::BOLD,
            Decoration::Italic => Decorations::ITALIC,
            Decoration::Underlined => Decorations::UNDERLINED,
            Decoration::Strikethrough => Decorations::STRIKETHROUGH,
            Decoration::Obfuscated => Decorations::OBFUSCATED,
        }
    }
}

bitflags! {
    /// Set of active decorations.
    ///
    /// Decorations have set semantics, not stack semantics: adding one that
    /// is already present changes nothing, and removing one clears it no
    /// matter how many times it was added.
    ///
    /// ```
    /// use minimessage::{Decoration, Decorations};
    ///
    /// let mut set = Decorations::empty();
    /// set.insert(Decoration::Bold.flag());
    /// set.insert(Decoration::Bold.flag());
    /// set.remove(Decoration::Bold.flag());
    /// assert!(set.is_empty());
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Decorations: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED = 1 << 4;
    }
}

impl Decorations {
    /// Check whether a single decoration is set.
    pub fn has(self, decoration: Decoration) -> bool {
        self.contains(decoration.flag())
    }

    /// Iterate the set decorations in declaration order.
    pub fn iter_decorations(self) -> impl Iterator<Item = Decoration> {
        Decoration::ALL
            .into_iter()
            .filter(move |decoration| self.has(*decoration))
    }
}

impl From<Decoration> for Decorations {
    fn from(decoration: Decoration) -> Self {
        decoration.flag()
    }
}

impl fmt::Display for Decorations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decoration) in self.iter_decorations().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(decoration.name())?;
        }
        Ok(())
    }
}

/// What happens when the text is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    pub const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];

    /// Look up a click action by tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }
}

/// What is shown when the text is hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

impl HoverAction {
    pub const ALL: [HoverAction; 3] = [
        HoverAction::ShowText,
        HoverAction::ShowItem,
        HoverAction::ShowEntity,
    ];

    /// Look up a hover action by tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        }
    }
}

/// A click action with its payload, e.g. a URL or a command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

impl fmt::Display for ClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.action.name(), self.value)
    }
}

/// A hover action carrying its own styled tree.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverEvent {
    pub action: HoverAction,
    pub value: Box<StyledNode>,
}

impl HoverEvent {
    pub fn new(action: HoverAction, value: StyledNode) -> Self {
        Self {
            action,
            value: Box::new(value),
        }
    }
}

impl fmt::Display for HoverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.action.name(), self.value.plain_text())
    }
}

/// Resolved formatting context for one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub decorations: Decorations,
    pub click: Option<ClickEvent>,
    pub hover: Option<HoverEvent>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.click.is_none()
            && self.hover.is_none()
    }
}

impl fmt::Display for Style {
    /// Space-separated `key=value` attributes; empty for an empty style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(color) = self.color {
            write!(f, "{sep}color={color}")?;
            sep = " ";
        }
        if !self.decorations.is_empty() {
            write!(f, "{sep}decorations={}", self.decorations)?;
            sep = " ";
        }
        if let Some(click) = &self.click {
            write!(f, "{sep}click={click}")?;
            sep = " ";
        }
        if let Some(hover) = &self.hover {
            write!(f, "{sep}hover={hover}")?;
        }
        Ok(())
    }
}
