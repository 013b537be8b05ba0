//! Markup helpers shared by the renderers.

use std::borrow::Cow;

/// Escape text for use in HTML element content or a double-quoted attribute.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Attributes every outbound link carries: new tab, no opener, no referrer.
pub const EXTERNAL_LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;
