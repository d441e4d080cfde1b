//! Placeholder substitution.
//!
//! A plain find/replace of `<name>` with its value, run before parsing.
//! Values are inserted verbatim, so they may themselves contain markup.

use crate::error::{MiniMessageError, Result};
use crate::parser::{TAG_END, TAG_START};

/// Replace `<name>` with `value` for each pair in a flat
/// `[name, value, name, value, ...]` list, in order.
///
/// Fails with [`MiniMessageError::InvalidArgument`] when the list has an odd
/// length.
///
/// # Examples
///
/// ```
/// use minimessage::handle_placeholders;
///
/// let out = handle_placeholders("Hello <player>", &["player", "Alex"]).unwrap();
/// assert_eq!(out, "Hello Alex");
/// assert!(handle_placeholders("x", &["lonely"]).is_err());
/// ```
pub fn handle_placeholders<S: AsRef<str>>(markup: &str, placeholders: &[S]) -> Result<String> {
    if placeholders.len() % 2 != 0 {
        return Err(MiniMessageError::InvalidArgument(format!(
            "placeholders must be name/value pairs, got {} entries",
            placeholders.len()
        )));
    }

    Ok(handle_placeholder_map(
        markup,
        placeholders
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref(), pair[1].as_ref())),
    ))
}

/// Replace `<name>` with `value` for each `(name, value)` pair, in order.
pub fn handle_placeholder_map<I, K, V>(markup: &str, placeholders: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = markup.to_string();
    let mut count = 0;
    for (name, value) in placeholders {
        let pattern = format!("{TAG_START}{}{TAG_END}", name.as_ref());
        out = out.replace(&pattern, value.as_ref());
        count += 1;
    }
    log::debug!("substituted {} placeholder(s)", count);
    out
}
