//! Tag scanner for MiniMessage markup.
//!
//! Locates `<...>` tag spans in raw text. Everything between matches is
//! literal text; the scanner never fails; a `<` that does not start a valid
//! tag is simply left in the literal text.

use std::ops::Range;

/// Opening tag delimiter.
pub const TAG_START: char = '<';
/// Closing tag delimiter.
pub const TAG_END: char = '>';
/// Prefix marking a closing tag, e.g. `</red>`.
pub const CLOSE_TAG: char = '/';
/// Field separator inside click and hover tags.
pub const SEPARATOR: char = ':';
/// Quote around a tag's free-text argument.
pub const QUOTE: char = '"';
/// Marker used by [`crate::escape_tokens`].
pub const ESCAPE: char = '\\';

/// One tag found by the [`Scanner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Byte offset of the opening `<`.
    pub start: usize,
    /// Byte offset just past the closing `>`.
    pub end: usize,
    /// Text between the delimiters.
    pub token: &'a str,
    /// Range of the quoted argument inside `token`, quotes excluded.
    pub inner_span: Option<Range<usize>>,
}

impl<'a> TagMatch<'a> {
    /// The quoted free-text argument, if the tag has one.
    pub fn inner(&self) -> Option<&'a str> {
        let token: &'a str = self.token;
        self.inner_span.clone().map(|span| &token[span])
    }
}

/// Scanner over MiniMessage markup.
///
/// Yields tag matches left to right. Matches never overlap, and adjacent
/// tags such as `<red><bold>` are always yielded separately.
///
/// A tag is `<`, a token, then `>`. The token is either a run of characters
/// containing no `<` or `>`, or such a run followed by a double-quoted
/// segment that may contain anything except `"` (so hover bodies can carry
/// markup of their own).
///
/// # Examples
///
/// ```
/// use minimessage::parser::Scanner;
///
/// let tokens: Vec<_> = Scanner::new("<red><bold>hi").map(|m| m.token).collect();
/// assert_eq!(tokens, vec!["red", "bold"]);
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Try to match a tag whose `<` sits at `start`.
    fn match_at(&self, start: usize) -> Option<TagMatch<'a>> {
        let bytes = self.input.as_bytes();
        let body = start + 1;

        // First `<` or `>` after the opening delimiter bounds the unquoted run.
        let stop = bytes[body..]
            .iter()
            .position(|&b| b == b'<' || b == b'>')
            .map(|p| body + p);
        let limit = stop.unwrap_or(bytes.len());

        let simple = stop
            .filter(|&stop| stop > body && bytes[stop] == b'>')
            .map(|stop| {
                let token = &self.input[body..stop];
                TagMatch {
                    start,
                    end: stop + 1,
                    token,
                    inner_span: trailing_quoted(token),
                }
            });

        // A simple token already closed by its quoted segment ends at its own `>`.
        if simple.as_ref().is_some_and(|m| m.inner_span.is_some()) {
            return simple;
        }

        self.match_quoted(start, limit).or(simple)
    }

    /// Quoted form: `<` run `"` inner `"` `>`, where the run lies in
    /// `start + 1..limit` and is non-empty.
    fn match_quoted(&self, start: usize, limit: usize) -> Option<TagMatch<'a>> {
        let bytes = self.input.as_bytes();
        let body = start + 1;

        // Leftmost opening quote wins, so a match never reaches past the
        // quote that closes it.
        for quote in (body + 1..limit).filter(|&i| bytes[i] == b'"') {
            let inner_start = quote + 1;
            let Some(close) = bytes[inner_start..]
                .iter()
                .position(|&b| b == b'"')
                .map(|p| inner_start + p)
            else {
                continue;
            };
            if close == inner_start || bytes.get(close + 1) != Some(&b'>') {
                continue;
            }
            return Some(TagMatch {
                start,
                end: close + 2,
                token: &self.input[body..close + 1],
                inner_span: Some(inner_start - body..close - body),
            });
        }
        None
    }
}

/// Inner range of a token that ends in a non-empty `"..."` segment.
fn trailing_quoted(token: &str) -> Option<Range<usize>> {
    let head = token.strip_suffix(QUOTE)?;
    let open = head.rfind(QUOTE)?;
    (open + 1 < head.len()).then(|| open + 1..head.len())
}

impl<'a> Iterator for Scanner<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let Some(offset) = self.input[self.pos..].find(TAG_START) else {
                self.pos = self.input.len();
                return None;
            };
            let start = self.pos + offset;
            if let Some(m) = self.match_at(start) {
                self.pos = m.end;
                return Some(m);
            }
            self.pos = start + TAG_START.len_utf8();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<TagMatch<'_>> {
        Scanner::new(input).collect()
    }

    fn tokens(input: &str) -> Vec<&str> {
        Scanner::new(input).map(|m| m.token).collect()
    }

    #[test]
    fn scan_plain_text() {
        assert!(scan("Hello World").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn scan_single_tag() {
        let matches = scan("a<red>b");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 1);
        assert_eq!(matches[0].end, 6);
        assert_eq!(matches[0].token, "red");
        assert_eq!(matches[0].inner(), None);
    }

    #[test]
    fn scan_adjacent_tags_independently() {
        let matches = scan("<red><bold><italic>x");
        assert_eq!(tokens("<red><bold><italic>x"), vec!["red", "bold", "italic"]);
        assert_eq!(matches[0].end, matches[1].start);
        assert_eq!(matches[1].end, matches[2].start);
    }

    #[test]
    fn scan_close_tags() {
        assert_eq!(tokens("<red>a</red>"), vec!["red", "/red"]);
    }

    #[test]
    fn scan_quoted_inner_with_delimiters() {
        let input = r#"<hover:show_text:"<red>hi</red>">x</hover>"#;
        let matches = scan(input);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].token, r#"hover:show_text:"<red>hi</red>""#);
        assert_eq!(matches[0].inner(), Some("<red>hi</red>"));
        assert_eq!(&input[matches[0].start..matches[0].end], &input[..33]);
        assert_eq!(matches[1].token, "/hover");
    }

    #[test]
    fn scan_quoted_inner_without_delimiters() {
        let matches = scan(r#"<hover:show_text:"plain">x"#);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].inner(), Some("plain"));
    }

    #[test]
    fn scan_quoted_inner_containing_close_delimiter() {
        let matches = scan(r#"<hover:show_text:"a > b">x"#);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].inner(), Some("a > b"));
    }

    #[test]
    fn quoted_tag_ends_at_its_own_delimiter() {
        let input = r#"<click:run_command:"/say">Type ">" to quote"#;
        let matches = scan(input);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, r#"click:run_command:"/say""#);
        assert_eq!(&input[matches[0].end..], r#"Type ">" to quote"#);

        let input = r#"<hover:show_text:"Tip">x">y"#;
        let matches = scan(input);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].inner(), Some("Tip"));
        assert_eq!(&input[matches[0].end..], r#"x">y"#);
    }

    #[test]
    fn quote_inside_run_opens_leftmost_segment() {
        let input = r#"<hover:show_text:"a>b">x">y"#;
        let matches = scan(input);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].inner(), Some("a>b"));
        assert_eq!(&input[matches[0].end..], r#"x">y"#);
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        assert!(scan("a < b").is_empty());
        assert!(scan("trailing <").is_empty());
        assert!(scan("<>").is_empty());
        assert_eq!(tokens("1 < 2 <red>x"), vec!["red"]);
    }

    #[test]
    fn nested_open_delimiter_restarts_scan() {
        let matches = scan("<<red>x");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 1);
        assert_eq!(matches[0].token, "red");
    }

    #[test]
    fn unterminated_quote_falls_back_to_simple_form() {
        assert_eq!(tokens(r#"<say "hi>"#), vec![r#"say "hi"#]);
    }

    #[test]
    fn scan_unicode() {
        let input = "日本<gold>語";
        let matches = scan(input);
        assert_eq!(matches.len(), 1);
        assert_eq!(&input[..matches[0].start], "日本");
        assert_eq!(&input[matches[0].end..], "語");
    }
}
