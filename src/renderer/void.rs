//! Elements that never have children and always self-close

static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "menuitem", "meta", "param", "source", "track", "wbr",
];

/// Whether `tag` names a void element (ASCII case-insensitive)
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements() {
        for tag in ["img", "br", "hr", "input", "meta", "wbr", "keygen", "menuitem"] {
            assert!(is_void(tag), "{} should be void", tag);
        }
    }

    #[test]
    fn test_non_void_elements() {
        for tag in ["p", "div", "span", "script", "imgs", ""] {
            assert!(!is_void(tag), "{} should not be void", tag);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_void("IMG"));
        assert!(is_void("Br"));
    }
}
