//! Tag escaping and stripping.
//!
//! Both run on the tag scanner alone; no style state is involved.

use crate::parser::{ESCAPE, QUOTE, Scanner, TAG_END, TAG_START};

/// Escape every tag so it is no longer recognized as markup.
///
/// Each delimiter of each tag is prefixed with `\`; quoted hover bodies are
/// escaped recursively. Literal text is left untouched.
///
/// # Examples
///
/// ```
/// use minimessage::escape_tokens;
///
/// assert_eq!(escape_tokens("<red>hi</red>"), r"\<red\>hi\</red\>");
/// ```
pub fn escape_tokens(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut last_end = 0;

    for m in Scanner::new(markup) {
        out.push_str(&markup[last_end..m.start]);
        last_end = m.end;

        out.push(ESCAPE);
        out.push(TAG_START);
        match m.inner_span.clone() {
            Some(span) => {
                out.push_str(&m.token[..span.start]);
                out.push_str(&escape_tokens(&m.token[span.clone()]));
                out.push_str(&m.token[span.end..]);
            }
            None => out.push_str(m.token),
        }
        out.push(ESCAPE);
        out.push(TAG_END);
    }
    out.push_str(&markup[last_end..]);

    out
}

/// Remove every tag, keeping only literal text.
///
/// Removing a tag can join the text around it into a new tag (`<<b>i>`).
/// Such joined tags are removed as well; the result never contains a tag.
///
/// # Examples
///
/// ```
/// use minimessage::strip_tokens;
///
/// assert_eq!(strip_tokens("<red>hi</red> <notatag>there"), "hi there");
/// assert_eq!(strip_tokens("1 < 2"), "1 < 2");
/// assert_eq!(strip_tokens("<<b>i>text"), "text");
/// ```
pub fn strip_tokens(markup: &str) -> String {
    let mut current = strip_joined(&strip_once(markup));
    // Only a joined tag with a quoted segment survives `strip_joined`.
    while Scanner::new(&current).next().is_some() {
        current = strip_joined(&strip_once(&current));
    }
    current
}

fn strip_once(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut last_end = 0;

    for m in Scanner::new(markup) {
        out.push_str(&markup[last_end..m.start]);
        last_end = m.end;
    }
    out.push_str(&markup[last_end..]);

    out
}

/// Remove simple tags left behind by [`strip_once`] in one pass.
///
/// Each `>` closes against the nearest open `<` in the output, and removing
/// that span reopens the `<` before it, so arbitrarily deep joins such as
/// `<<<b>i>i>` fold in linear time. Runs holding a quote are kept for the
/// scanner, which may read them as a quoted tag.
fn strip_joined(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Offsets in `out` of every `<` not yet followed by a `>`.
    let mut open: Vec<usize> = Vec::new();

    for c in text.chars() {
        match c {
            TAG_START => {
                open.push(out.len());
                out.push(c);
            }
            TAG_END => match open.last() {
                Some(&start) if start + 1 < out.len() && !out[start + 1..].contains(QUOTE) => {
                    out.truncate(start);
                    open.pop();
                }
                _ => {
                    out.push(c);
                    open.clear();
                }
            },
            _ => out.push(c),
        }
    }

    out
}
