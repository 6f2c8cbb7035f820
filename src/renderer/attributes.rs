//! Attribute map flattening
//!
//! Nested maps become dash-joined names (`data: {foo: "x"}` is
//! `data-foo="x"`), lists become one space-joined value with blank entries
//! dropped, and everything else is stringified. Insertion order is kept.
//!
//! Names are never escaped. A name that is empty or contains whitespace,
//! quotes, `<`, `>`, `/`, `=` or control characters is rejected whether or
//! not escaping is on.

use thiserror::Error;

use crate::markup::{AttrValue, Attributes, Scalar};

use super::escape::maybe_escape;

/// A flattened attribute name that cannot appear inside a tag
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid attribute name {0:?}")]
pub struct InvalidAttributeName(pub String);

/// Flatten `attrs` into `name="value"` tokens
pub fn serialize(attrs: &Attributes, escape: bool) -> Result<Vec<String>, InvalidAttributeName> {
    let mut tokens = Vec::with_capacity(attrs.len());
    push_tokens(attrs, None, escape, &mut tokens)?;
    Ok(tokens)
}

fn push_tokens(
    attrs: &Attributes,
    prefix: Option<&str>,
    escape: bool,
    tokens: &mut Vec<String>,
) -> Result<(), InvalidAttributeName> {
    for (key, value) in attrs {
        let name = match prefix {
            Some(prefix) => format!("{}-{}", prefix, key),
            None => key.clone(),
        };

        match value {
            AttrValue::Map(inner) => push_tokens(inner, Some(&name), escape, tokens)?,
            other => {
                if !is_valid_name(&name) {
                    return Err(InvalidAttributeName(name));
                }
                let text = value_text(other, escape)?;
                tokens.push(format!(r#"{}="{}""#, name, text));
            }
        }
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_whitespace()
                || ch.is_control()
                || matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Stringified and escaped form of a single value
fn value_text(value: &AttrValue, escape: bool) -> Result<String, InvalidAttributeName> {
    let text = match value {
        AttrValue::Null => String::new(),
        AttrValue::Scalar(scalar) => maybe_escape(&scalar.to_string(), escape, false).into_owned(),
        AttrValue::Safe(safe) => safe.as_str().to_string(),
        AttrValue::List(items) => join_list(items, escape)?,
        // A map where a scalar was expected: its unescaped tokens, escaped as one string
        AttrValue::Map(inner) => {
            let raw = serialize(inner, false)?.join(" ");
            maybe_escape(&raw, escape, false).into_owned()
        }
    };
    Ok(text)
}

fn join_list(items: &[AttrValue], escape: bool) -> Result<String, InvalidAttributeName> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items.iter().filter(|item| !is_falsy(item)) {
        let text = value_text(item, escape)?;
        if !text.is_empty() {
            parts.push(text);
        }
    }
    Ok(parts.join(" "))
}

fn is_falsy(value: &AttrValue) -> bool {
    matches!(value, AttrValue::Null | AttrValue::Scalar(Scalar::Bool(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::markup::SafeString;

    #[test]
    fn test_scalar_values() {
        let tokens = serialize(&attrs! { "class" => "foo", "tabindex" => 1 }, true).unwrap();
        assert_eq!(tokens, vec![r#"class="foo""#, r#"tabindex="1""#]);
    }

    #[test]
    fn test_nested_maps_preserve_order() {
        let attrs = attrs! {
            "data" => attrs! {
                "foo" => attrs! { "bar" => "baz" },
                "bar" => "bazz",
            },
        };
        assert_eq!(
            serialize(&attrs, true).unwrap().join(" "),
            r#"data-foo-bar="baz" data-bar="bazz""#
        );
    }

    #[test]
    fn test_list_drops_blank_entries() {
        let attrs = attrs! {
            "class" => vec![
                AttrValue::from("foo"),
                AttrValue::Null,
                AttrValue::from(""),
                AttrValue::from(false),
                AttrValue::from("bar"),
            ],
        };
        assert_eq!(serialize(&attrs, true).unwrap(), vec![r#"class="foo bar""#]);
    }

    #[test]
    fn test_all_blank_list() {
        let attrs = attrs! { "class" => vec![AttrValue::Null, AttrValue::from("")] };
        assert_eq!(serialize(&attrs, true).unwrap(), vec![r#"class="""#]);
    }

    #[test]
    fn test_values_are_escaped() {
        let attrs = attrs! {
            "title" => r#"a "quoted" <value>"#,
            "class" => vec!["x&y"],
        };
        assert_eq!(
            serialize(&attrs, true).unwrap(),
            vec![
                r#"title="a &quot;quoted&quot; &lt;value&gt;""#,
                r#"class="x&amp;y""#,
            ]
        );
    }

    #[test]
    fn test_escaping_disabled() {
        let attrs = attrs! { "title" => "<b>" };
        assert_eq!(serialize(&attrs, false).unwrap(), vec![r#"title="<b>""#]);
    }

    #[test]
    fn test_safe_values_are_not_escaped() {
        let attrs = attrs! {
            "onclick" => SafeString::new("go('&')"),
            "class" => vec![AttrValue::from(SafeString::new("a&b")), AttrValue::from("c&d")],
        };
        assert_eq!(
            serialize(&attrs, true).unwrap(),
            vec![r#"onclick="go('&')""#, r#"class="a&b c&amp;d""#]
        );
    }

    #[test]
    fn test_null_and_false_values() {
        let attrs = attrs! { "title" => AttrValue::Null, "hidden" => false };
        assert_eq!(
            serialize(&attrs, true).unwrap(),
            vec![r#"title="""#, r#"hidden="false""#]
        );
    }

    #[test]
    fn test_empty_nested_map_emits_nothing() {
        let attrs = attrs! { "data" => Attributes::new(), "id" => "x" };
        assert_eq!(serialize(&attrs, true).unwrap(), vec![r#"id="x""#]);
    }

    #[test]
    fn test_unsafe_names_are_rejected() {
        for name in ["x\"><script>", "a b", "a=b", "", "on/x", "a\nb"] {
            let attrs = attrs! { name => "v" };
            assert_eq!(
                serialize(&attrs, true),
                Err(InvalidAttributeName(name.to_string())),
                "{:?} should be rejected",
                name
            );
            assert!(serialize(&attrs, false).is_err());
        }
    }

    #[test]
    fn test_nested_names_are_checked_after_joining() {
        let attrs = attrs! { "data" => attrs! { "bad key" => 1 } };
        assert_eq!(
            serialize(&attrs, true),
            Err(InvalidAttributeName("data-bad key".to_string()))
        );
        let ok = attrs! { "aria" => attrs! { "label" => "x" }, "@click" => "go", ":id" => 1 };
        assert!(serialize(&ok, true).is_ok());
    }

    #[test]
    fn test_nested_list_and_map_fallback() {
        let attrs = attrs! {
            "class" => vec![
                AttrValue::from("a"),
                AttrValue::from(vec!["b", "c"]),
                AttrValue::from(Vec::<AttrValue>::new()),
            ],
            "data" => vec![AttrValue::from(attrs! { "k" => "v" })],
        };
        assert_eq!(
            serialize(&attrs, true).unwrap(),
            vec![r#"class="a b c""#, r#"data="k=&quot;v&quot;""#]
        );
    }
}
