//! HTML escaping policy

use std::borrow::Cow;

/// Escape `text` unless escaping is off or the text is already trusted
pub fn maybe_escape(text: &str, escape: bool, is_safe: bool) -> Cow<'_, str> {
    if escape && !is_safe {
        escape_html(text)
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace HTML-significant characters with entities in a single pass
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'')
}
