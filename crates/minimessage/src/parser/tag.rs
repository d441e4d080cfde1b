//! Tag classification and style state.
//!
//! [`Tag::parse`] turns the text inside `<...>` into a typed tag, and
//! [`StyleState`] folds tags into the formatting context active at each point
//! of the scan.

use crate::color::Color;
use crate::error::{MiniMessageError, Result};
use crate::node::StyledNode;
use crate::style::{
    ClickAction, ClickEvent, Decoration, Decorations, HoverAction, HoverEvent, Style,
};

use super::scanner::{CLOSE_TAG, SEPARATOR};

/// Keyword of click tags: `<click:action:payload>`.
pub const CLICK: &str = "click";
/// Keyword of hover tags: `<hover:action:"markup">`.
pub const HOVER: &str = "hover";

/// A classified tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    ClickOpen(ClickEvent),
    ClickClose,
    HoverOpen(HoverEvent),
    HoverClose,
    DecorationOpen(Decoration),
    DecorationClose(Decoration),
    ColorOpen(Color),
    ColorClose(Color),
    /// Not a known tag; rendered back as literal text.
    Unrecognized,
}

/// What a tag did to the style state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    ColorOpen,
    ColorClose,
    DecorationOpen,
    DecorationClose,
    ClickOpen,
    ClickClose,
    HoverOpen,
    HoverClose,
    Unrecognized,
}

impl Tag {
    /// Classify a tag token.
    ///
    /// `inner` is the quoted argument found by the scanner. Hover bodies are
    /// handed to `parse_body`, which must run a fresh, independent parse.
    ///
    /// Dispatch order is click, hover, decoration, color; anything else is
    /// [`Tag::Unrecognized`].
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::parser::Tag;
    /// use minimessage::{Color, StyledNode};
    ///
    /// let tag = Tag::parse("RED", None, |_| Ok(StyledNode::default())).unwrap();
    /// assert_eq!(tag, Tag::ColorOpen(Color::Red));
    ///
    /// let tag = Tag::parse("/bold", None, |_| Ok(StyledNode::default())).unwrap();
    /// assert!(matches!(tag, Tag::DecorationClose(_)));
    ///
    /// let err = Tag::parse("click:open_url", None, |_| Ok(StyledNode::default()));
    /// assert!(err.is_err());
    /// ```
    pub fn parse<F>(token: &str, inner: Option<&str>, parse_body: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Result<StyledNode>,
    {
        if let Some(rest) = keyword_args(token, CLICK) {
            return Self::parse_click(token, rest);
        }
        if is_close_of(token, CLICK) {
            return Ok(Tag::ClickClose);
        }

        if let Some(rest) = keyword_args(token, HOVER) {
            return Self::parse_hover(token, rest, inner, parse_body);
        }
        if is_close_of(token, HOVER) {
            return Ok(Tag::HoverClose);
        }

        let closed = token.strip_prefix(CLOSE_TAG);

        if let Some(decoration) = Decoration::from_name(token) {
            return Ok(Tag::DecorationOpen(decoration));
        }
        if let Some(decoration) = closed.and_then(Decoration::from_name) {
            return Ok(Tag::DecorationClose(decoration));
        }

        if let Some(color) = Color::from_name(token) {
            return Ok(Tag::ColorOpen(color));
        }
        if let Some(color) = closed.and_then(Color::from_name) {
            return Ok(Tag::ColorClose(color));
        }

        Ok(Tag::Unrecognized)
    }

    /// `rest` is everything after `click:`; the payload is kept verbatim,
    /// separators included.
    fn parse_click(token: &str, rest: &str) -> Result<Self> {
        let (action, payload) = rest
            .split_once(SEPARATOR)
            .ok_or_else(|| MiniMessageError::MalformedTag(token.to_string()))?;
        let action = ClickAction::from_name(action).ok_or_else(|| invalid_action(action, token))?;
        Ok(Tag::ClickOpen(ClickEvent::new(action, payload)))
    }

    fn parse_hover<F>(token: &str, rest: &str, inner: Option<&str>, parse_body: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Result<StyledNode>,
    {
        let (action, _) = rest
            .split_once(SEPARATOR)
            .ok_or_else(|| MiniMessageError::MalformedTag(token.to_string()))?;
        let action = HoverAction::from_name(action).ok_or_else(|| invalid_action(action, token))?;
        let body = inner.ok_or_else(|| MiniMessageError::MalformedTag(token.to_string()))?;
        log::trace!("parsing hover body {:?}", body);
        Ok(Tag::HoverOpen(HoverEvent::new(action, parse_body(body)?)))
    }

    /// The disposition this tag produces when applied.
    pub fn disposition(&self) -> Disposition {
        match self {
            Tag::ClickOpen(_) => Disposition::ClickOpen,
            Tag::ClickClose => Disposition::ClickClose,
            Tag::HoverOpen(_) => Disposition::HoverOpen,
            Tag::HoverClose => Disposition::HoverClose,
            Tag::DecorationOpen(_) => Disposition::DecorationOpen,
            Tag::DecorationClose(_) => Disposition::DecorationClose,
            Tag::ColorOpen(_) => Disposition::ColorOpen,
            Tag::ColorClose(_) => Disposition::ColorClose,
            Tag::Unrecognized => Disposition::Unrecognized,
        }
    }
}

/// Arguments after `keyword:`, matching the keyword case-insensitively.
fn keyword_args<'t>(token: &'t str, keyword: &str) -> Option<&'t str> {
    let head = token.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    token[keyword.len()..].strip_prefix(SEPARATOR)
}

fn is_close_of(token: &str, keyword: &str) -> bool {
    token
        .strip_prefix(CLOSE_TAG)
        .is_some_and(|name| name.eq_ignore_ascii_case(keyword))
}

fn invalid_action(action: &str, token: &str) -> MiniMessageError {
    MiniMessageError::InvalidAction {
        action: action.to_string(),
        token: token.to_string(),
    }
}

/// Formatting context accumulated while walking one markup string.
///
/// Colors, click actions and hover actions are stacks: closing pops the most
/// recently opened entry whatever name the close tag uses. Decorations are a
/// plain set: closing removes the decoration outright, even if other tags
/// were opened after it. Closing with nothing open is a no-op.
#[derive(Clone, Debug, Default)]
pub struct StyleState {
    colors: Vec<Color>,
    decorations: Decorations,
    clicks: Vec<ClickEvent>,
    hovers: Vec<HoverEvent>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tag and report what it did.
    pub fn apply(&mut self, tag: Tag) -> Disposition {
        let disposition = tag.disposition();
        match tag {
            Tag::ClickOpen(click) => self.clicks.push(click),
            Tag::ClickClose => pop_or_ignore(&mut self.clicks, CLICK),
            Tag::HoverOpen(hover) => self.hovers.push(hover),
            Tag::HoverClose => pop_or_ignore(&mut self.hovers, HOVER),
            Tag::DecorationOpen(decoration) => self.decorations.insert(decoration.flag()),
            Tag::DecorationClose(decoration) => self.decorations.remove(decoration.flag()),
            Tag::ColorOpen(color) => self.colors.push(color),
            Tag::ColorClose(color) => pop_or_ignore(&mut self.colors, color.name()),
            Tag::Unrecognized => {}
        }
        disposition
    }

    /// Snapshot of the active context.
    pub fn style(&self) -> Style {
        Style {
            color: self.colors.last().copied(),
            decorations: self.decorations,
            click: self.clicks.last().cloned(),
            hover: self.hovers.last().cloned(),
        }
    }

    /// A text node stamped with the active context.
    pub fn text_node(&self, content: &str) -> StyledNode {
        StyledNode::builder(content).style(self.style()).build()
    }
}

fn pop_or_ignore<T>(stack: &mut Vec<T>, name: &str) {
    if stack.pop().is_none() {
        log::trace!("ignoring unmatched close tag </{}>", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> Result<Tag> {
        Tag::parse(token, None, |_| Ok(StyledNode::default()))
    }

    #[test]
    fn parse_color_tags() {
        assert_eq!(classify("red").unwrap(), Tag::ColorOpen(Color::Red));
        assert_eq!(classify("Dark_Gray").unwrap(), Tag::ColorOpen(Color::DarkGray));
        assert_eq!(classify("/red").unwrap(), Tag::ColorClose(Color::Red));
    }

    #[test]
    fn parse_decoration_tags() {
        assert_eq!(classify("bold").unwrap(), Tag::DecorationOpen(Decoration::Bold));
        assert_eq!(
            classify("/OBFUSCATED").unwrap(),
            Tag::DecorationClose(Decoration::Obfuscated)
        );
    }

    #[test]
    fn parse_click_tag() {
        let tag = classify("click:run_command:/tp 0 64 0").unwrap();
        assert_eq!(
            tag,
            Tag::ClickOpen(ClickEvent::new(ClickAction::RunCommand, "/tp 0 64 0"))
        );
        assert_eq!(classify("/click").unwrap(), Tag::ClickClose);
    }

    #[test]
    fn click_payload_keeps_separators() {
        let tag = classify("click:open_url:https://example.com:8080/a").unwrap();
        assert_eq!(
            tag,
            Tag::ClickOpen(ClickEvent::new(
                ClickAction::OpenUrl,
                "https://example.com:8080/a"
            ))
        );
    }

    #[test]
    fn click_keyword_is_case_insensitive() {
        let tag = classify("CLICK:Suggest_Command:/msg ").unwrap();
        assert_eq!(
            tag,
            Tag::ClickOpen(ClickEvent::new(ClickAction::SuggestCommand, "/msg "))
        );
    }

    #[test]
    fn click_with_too_few_fields_is_malformed() {
        assert_eq!(
            classify("click:open_url"),
            Err(MiniMessageError::MalformedTag("click:open_url".into()))
        );
        assert!(matches!(
            classify("click:"),
            Err(MiniMessageError::MalformedTag(_))
        ));
    }

    #[test]
    fn click_with_unknown_action_is_invalid() {
        assert_eq!(
            classify("click:teleport:home"),
            Err(MiniMessageError::InvalidAction {
                action: "teleport".into(),
                token: "click:teleport:home".into(),
            })
        );
    }

    #[test]
    fn hover_passes_inner_to_body_parser() {
        let tag = Tag::parse(r#"hover:show_text:"tip""#, Some("tip"), |body| {
            Ok(StyledNode::text(body.to_uppercase()))
        })
        .unwrap();
        assert_eq!(
            tag,
            Tag::HoverOpen(HoverEvent::new(HoverAction::ShowText, StyledNode::text("TIP")))
        );
    }

    #[test]
    fn hover_body_errors_propagate() {
        let result = Tag::parse(r#"hover:show_text:"x""#, Some("x"), |_| {
            Err(MiniMessageError::TooDeep(0))
        });
        assert_eq!(result, Err(MiniMessageError::TooDeep(0)));
    }

    #[test]
    fn hover_without_quoted_body_is_malformed() {
        assert!(matches!(
            classify("hover:show_text:plain"),
            Err(MiniMessageError::MalformedTag(_))
        ));
        assert!(matches!(
            classify("hover:show_text"),
            Err(MiniMessageError::MalformedTag(_))
        ));
    }

    #[test]
    fn hover_with_unknown_action_is_invalid() {
        assert!(matches!(
            classify(r#"hover:show_url:"x""#),
            Err(MiniMessageError::InvalidAction { .. })
        ));
    }

    #[test]
    fn unknown_tokens_are_unrecognized() {
        assert_eq!(classify("notareal").unwrap(), Tag::Unrecognized);
        assert_eq!(classify("/notareal").unwrap(), Tag::Unrecognized);
        assert_eq!(classify("clicky:open_url:x").unwrap(), Tag::Unrecognized);
        assert_eq!(classify("/").unwrap(), Tag::Unrecognized);
    }

    #[test]
    fn color_stack_discipline() {
        let mut state = StyleState::new();
        state.apply(Tag::ColorOpen(Color::Red));
        state.apply(Tag::ColorOpen(Color::Blue));
        assert_eq!(state.style().color, Some(Color::Blue));

        // Any color close pops the most recent entry.
        state.apply(Tag::ColorClose(Color::Red));
        assert_eq!(state.style().color, Some(Color::Red));
        state.apply(Tag::ColorClose(Color::Red));
        assert_eq!(state.style().color, None);
    }

    #[test]
    fn decoration_set_discipline() {
        let mut state = StyleState::new();
        state.apply(Tag::DecorationOpen(Decoration::Bold));
        state.apply(Tag::DecorationOpen(Decoration::Bold));
        state.apply(Tag::DecorationOpen(Decoration::Italic));
        assert_eq!(
            state.style().decorations,
            Decorations::BOLD | Decorations::ITALIC
        );

        state.apply(Tag::DecorationClose(Decoration::Bold));
        assert_eq!(state.style().decorations, Decorations::ITALIC);
    }

    #[test]
    fn unmatched_closes_are_noops() {
        let mut state = StyleState::new();
        assert_eq!(state.apply(Tag::ColorClose(Color::Red)), Disposition::ColorClose);
        assert_eq!(state.apply(Tag::ClickClose), Disposition::ClickClose);
        assert_eq!(state.apply(Tag::HoverClose), Disposition::HoverClose);
        assert_eq!(
            state.apply(Tag::DecorationClose(Decoration::Bold)),
            Disposition::DecorationClose
        );
        assert!(state.style().is_empty());
    }

    #[test]
    fn click_and_hover_stacks() {
        let mut state = StyleState::new();
        state.apply(Tag::ClickOpen(ClickEvent::new(ClickAction::OpenUrl, "a")));
        state.apply(Tag::ClickOpen(ClickEvent::new(ClickAction::OpenUrl, "b")));
        assert_eq!(state.style().click.map(|c| c.value), Some("b".to_string()));
        state.apply(Tag::ClickClose);
        assert_eq!(state.style().click.map(|c| c.value), Some("a".to_string()));

        let hover = HoverEvent::new(HoverAction::ShowText, StyledNode::text("tip"));
        state.apply(Tag::HoverOpen(hover.clone()));
        assert_eq!(state.style().hover, Some(hover));
        assert_eq!(state.apply(Tag::Unrecognized), Disposition::Unrecognized);
        state.apply(Tag::HoverClose);
        assert_eq!(state.style().hover, None);
    }
}
