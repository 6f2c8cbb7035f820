//! Structure classification
//!
//! Typed trees are classified with a single match in [`Node::shape`].
//! Untyped trees arrive as JSON in the hiccup layout:
//!
//! ```text
//! ["p", {"class": "foo"}, "bar", ["span", "baz"]]   element with attributes
//! ["p", "bar"]                                       element without attributes
//! [["div", "a"], ["div", "b"]]                       fragment
//! null, []                                           empty
//! "text", 1, 0.5, true                               text
//! ```

use serde_json::{Map, Number, Value};

use crate::RenderError;

use super::{AttrValue, Attributes, Node, SafeString, Scalar};

/// The shape of one node as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Empty,
    Fragment(&'a [Node]),
    Element {
        tag: &'a str,
        /// `None` for both an absent and an empty attribute map
        attributes: Option<&'a Attributes>,
        children: &'a [Node],
    },
    Text(&'a Scalar),
    Safe(&'a SafeString),
}

impl Node {
    /// Classify this node
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Node::Empty => Shape::Empty,
            Node::Fragment(nodes) if nodes.is_empty() => Shape::Empty,
            Node::Fragment(nodes) => Shape::Fragment(nodes),
            Node::Element(element) => Shape::Element {
                tag: &element.tag,
                attributes: element.attributes.as_ref().filter(|a| !a.is_empty()),
                children: &element.children,
            },
            Node::Text(scalar) => Shape::Text(scalar),
            Node::Safe(safe) => Shape::Safe(safe),
        }
    }

    /// Parse and classify a JSON markup tree
    pub fn from_json_str(source: &str) -> Result<Node, RenderError> {
        let value: Value = serde_json::from_str(source)?;
        from_json(&value)
    }
}

impl TryFrom<Value> for Node {
    type Error = RenderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        from_json(&value)
    }
}

impl TryFrom<&Value> for Node {
    type Error = RenderError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        from_json(value)
    }
}

/// Classify an untyped JSON markup tree into a [`Node`]
pub fn from_json(value: &Value) -> Result<Node, RenderError> {
    let mut path = Vec::new();
    classify_node(value, &mut path)
}

fn classify_node(value: &Value, path: &mut Vec<usize>) -> Result<Node, RenderError> {
    match value {
        Value::Object(_) => Err(RenderError::malformed(
            path,
            "attribute map outside of an element",
        )),
        Value::Array(items) => classify_array(items, path),
        Value::Null => Ok(Node::Empty),
        Value::String(s) => Ok(Node::Text(Scalar::Str(s.clone()))),
        Value::Number(n) => Ok(Node::Text(number_scalar(n))),
        Value::Bool(b) => Ok(Node::Text(Scalar::Bool(*b))),
    }
}

fn classify_array(items: &[Value], path: &mut Vec<usize>) -> Result<Node, RenderError> {
    let Some(first) = items.first() else {
        return Ok(Node::Empty);
    };

    if first.is_array() {
        return classify_children(items, 0, path).map(Node::Fragment);
    }

    let tag = tag_name(first).ok_or_else(|| {
        path.push(0);
        let err = RenderError::malformed(
            path,
            format!("tag must be a non-empty string, got {}", describe(first)),
        );
        path.pop();
        err
    })?;

    let (attributes, first_child) = match items.get(1) {
        Some(Value::Object(map)) => (Some(attributes_from_json(map)), 2),
        _ => (None, 1),
    };

    let children = classify_children(&items[first_child..], first_child, path)?;

    Ok(Node::Element(super::Element {
        tag,
        attributes,
        children,
    }))
}

fn classify_children(
    items: &[Value],
    offset: usize,
    path: &mut Vec<usize>,
) -> Result<Vec<Node>, RenderError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            path.push(offset + i);
            let node = classify_node(item, path);
            path.pop();
            node
        })
        .collect()
}

fn tag_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_scalar(n: &Number) -> Scalar {
    match n.as_i64() {
        Some(i) => Scalar::Int(i),
        None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "an empty string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn attributes_from_json(map: &Map<String, Value>) -> Attributes {
    map.iter()
        .map(|(key, value)| (key.clone(), attr_value_from_json(value)))
        .collect()
}

fn attr_value_from_json(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(b) => AttrValue::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => AttrValue::Scalar(number_scalar(n)),
        Value::String(s) => AttrValue::Scalar(Scalar::Str(s.clone())),
        Value::Array(items) => AttrValue::List(items.iter().map(attr_value_from_json).collect()),
        Value::Object(map) => AttrValue::Map(attributes_from_json(map)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::markup::Element;

    #[test]
    fn test_shape_empty_fragment_is_empty() {
        assert_eq!(Node::Fragment(vec![]).shape(), Shape::Empty);
        assert_eq!(Node::Empty.shape(), Shape::Empty);
    }

    #[test]
    fn test_shape_empty_attributes_are_none() {
        let node = Node::Element(Element::new("p").attrs(Attributes::new()));
        match node.shape() {
            Shape::Element { attributes, .. } => assert!(attributes.is_none()),
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_json_element_with_attributes() {
        let node = from_json(&json!(["p", {"class": "foo"}, "bar"])).unwrap();
        let expected = Node::Element(Element::new("p").attr("class", "foo").child("bar"));
        assert_eq!(node, expected);
    }

    #[test]
    fn test_json_element_without_attributes() {
        let node = from_json(&json!(["p", "foo", 1])).unwrap();
        let expected = Node::Element(Element::new("p").child("foo").child(1));
        assert_eq!(node, expected);
    }

    #[test]
    fn test_json_fragment() {
        let node = from_json(&json!([["div", "a"], ["b", "c"]])).unwrap();
        match node {
            Node::Fragment(children) => assert_eq!(children.len(), 2),
            other => panic!("expected fragment, got {:?}", other),
        }
    }

    #[test]
    fn test_json_empty_values() {
        assert_eq!(from_json(&json!(null)).unwrap(), Node::Empty);
        assert_eq!(from_json(&json!([])).unwrap(), Node::Empty);
    }

    #[test]
    fn test_json_scalars() {
        assert_eq!(from_json(&json!(0)).unwrap(), Node::text(0));
        assert_eq!(from_json(&json!(0.5)).unwrap(), Node::text(0.5));
        assert_eq!(from_json(&json!(false)).unwrap(), Node::text(false));
    }

    #[test]
    fn test_json_numeric_tag_is_stringified() {
        let node = from_json(&json!([1, "x"])).unwrap();
        assert_eq!(node, Node::Element(Element::new("1").child("x")));
    }

    #[test]
    fn test_json_object_tag_is_malformed() {
        let err = from_json(&json!(["div", [{"a": 1}, "x"]])).unwrap_err();
        match err {
            RenderError::MalformedNode { path, .. } => assert_eq!(path, "/1/0"),
            other => panic!("expected malformed node, got {:?}", other),
        }
    }

    #[test]
    fn test_json_object_in_child_position_is_malformed() {
        let err = from_json(&json!(["div", "a", {"b": 1}])).unwrap_err();
        match err {
            RenderError::MalformedNode { path, reason } => {
                assert_eq!(path, "/2");
                assert!(reason.contains("attribute map"));
            }
            other => panic!("expected malformed node, got {:?}", other),
        }
    }

    #[test]
    fn test_json_null_tag_is_malformed() {
        assert!(matches!(
            from_json(&json!([null, "x"])),
            Err(RenderError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_json_attribute_order_is_preserved() {
        let node = Node::from_json_str(r#"["a", {"z": 1, "a": 2, "m": 3}]"#).unwrap();
        let Node::Element(el) = node else {
            panic!("expected element");
        };
        let keys: Vec<_> = el.attributes.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(matches!(
            Node::from_json_str("[\"p\", "),
            Err(RenderError::Json(_))
        ));
    }
}
